//! Number of teaching weeks per term.
//!
//! The counts are school-calendar data, not a formula. They are loaded from
//! the `[distribution]` table of the calendar document; without one, term 3
//! has 10 weeks and every other term 11.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use aula_model::TermKey;

use crate::error::CalendarError;

pub const DEFAULT_WEEKS_PER_TERM: usize = 11;
const SHORT_TERM: &str = "3";
const SHORT_TERM_WEEKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeekPolicy", into = "RawWeekPolicy")]
pub struct WeekPolicy {
    default_weeks: usize,
    overrides: BTreeMap<TermKey, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawWeekPolicy {
    #[serde(default = "default_weeks")]
    default_weeks: usize,
    #[serde(default)]
    overrides: BTreeMap<String, usize>,
}

fn default_weeks() -> usize {
    DEFAULT_WEEKS_PER_TERM
}

impl WeekPolicy {
    /// Builds a policy, rejecting zero week counts.
    pub fn new<I, S>(default_weeks: usize, overrides: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        if default_weeks == 0 {
            return Err(CalendarError::InvalidWeekCount {
                scope: "default".to_string(),
            });
        }
        let mut map = BTreeMap::new();
        for (term, weeks) in overrides {
            let key = TermKey::new(term.as_ref());
            if weeks == 0 {
                return Err(CalendarError::InvalidWeekCount {
                    scope: format!("term {key}"),
                });
            }
            map.insert(key, weeks);
        }
        Ok(Self {
            default_weeks,
            overrides: map,
        })
    }

    /// Weeks in `term`; unknown and blank terms get the default count.
    pub fn weeks_in_term(&self, term: &str) -> usize {
        self.overrides
            .get(&TermKey::new(term))
            .copied()
            .unwrap_or(self.default_weeks)
    }

    pub fn default_weeks(&self) -> usize {
        self.default_weeks
    }

    pub fn overrides(&self) -> impl Iterator<Item = (&TermKey, usize)> {
        self.overrides.iter().map(|(term, weeks)| (term, *weeks))
    }
}

impl Default for WeekPolicy {
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(TermKey::new(SHORT_TERM), SHORT_TERM_WEEKS);
        Self {
            default_weeks: DEFAULT_WEEKS_PER_TERM,
            overrides,
        }
    }
}

impl TryFrom<RawWeekPolicy> for WeekPolicy {
    type Error = CalendarError;

    fn try_from(raw: RawWeekPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.default_weeks, raw.overrides)
    }
}

impl From<WeekPolicy> for RawWeekPolicy {
    fn from(policy: WeekPolicy) -> Self {
        Self {
            default_weeks: policy.default_weeks,
            overrides: policy
                .overrides
                .into_iter()
                .map(|(term, weeks)| (term.as_str().to_string(), weeks))
                .collect(),
        }
    }
}
