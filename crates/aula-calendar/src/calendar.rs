//! Term/week calendar used to label weeks with their date ranges.
//!
//! The calendar is display data only. Lesson allocation never reads dates; it
//! only uses the [`WeekPolicy`] carried alongside.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use aula_model::{TermKey, parse_week_number};

use crate::document::{CalendarDocument, TermDocument};
use crate::error::CalendarError;
use crate::paths::calendar_override;
use crate::policy::WeekPolicy;

const EMBEDDED_CALENDAR: &str = include_str!("../data/calendar_2025.toml");
const EMBEDDED_ORIGIN: &str = "<embedded calendar_2025.toml>";
const DATE_FORMAT: &str = "%d/%m/%Y";
const SHORT_DATE_FORMAT: &str = "%d/%m";

/// Inclusive range of school days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Day and month only, e.g. `03/02 - 07/02`.
    pub fn short(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(SHORT_DATE_FORMAT),
            self.end.format(SHORT_DATE_FORMAT)
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    pub label: String,
    /// 1-based week number parsed from the label.
    pub number: u32,
    pub range: DateRange,
}

/// A term whose calendar lists a different number of weeks than the policy allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCountMismatch {
    pub term: TermKey,
    pub calendar_weeks: usize,
    pub policy_weeks: usize,
}

#[derive(Debug, Clone)]
pub struct Calendar {
    name: String,
    year: Option<i32>,
    policy: WeekPolicy,
    terms: BTreeMap<TermKey, Vec<CalendarWeek>>,
}

impl Calendar {
    /// A calendar without terms, using the default week policy.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            year: None,
            policy: WeekPolicy::default(),
            terms: BTreeMap::new(),
        }
    }

    /// The calendar compiled into the binary.
    pub fn embedded() -> Result<Self, CalendarError> {
        Self::from_toml_str(EMBEDDED_CALENDAR, Path::new(EMBEDDED_ORIGIN))
    }

    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path).map_err(|e| CalendarError::io(path, e))?;
        let calendar = Self::from_toml_str(&content, path)?;
        info!(
            path = %path.display(),
            terms = calendar.terms.len(),
            "loaded calendar"
        );
        Ok(calendar)
    }

    /// Parses a calendar document; `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, CalendarError> {
        let document: CalendarDocument =
            toml::from_str(content).map_err(|source| CalendarError::Toml {
                path: PathBuf::from(origin),
                source,
            })?;
        Self::from_document(document)
    }

    pub fn from_document(document: CalendarDocument) -> Result<Self, CalendarError> {
        let mut terms = BTreeMap::new();
        for term in document.terms {
            let key = TermKey::new(&term.key);
            if terms.contains_key(&key) {
                return Err(CalendarError::DuplicateTerm {
                    term: key.to_string(),
                });
            }
            let weeks = parse_term_weeks(&key, &term)?;
            debug!(term = %key, weeks = weeks.len(), "calendar term");
            terms.insert(key, weeks);
        }
        Ok(Self {
            name: document.calendar.name,
            year: document.calendar.year,
            policy: document.distribution,
            terms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn policy(&self) -> &WeekPolicy {
        &self.policy
    }

    #[must_use]
    pub fn with_policy(mut self, policy: WeekPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn term_keys(&self) -> impl Iterator<Item = &TermKey> {
        self.terms.keys()
    }

    /// Weeks of `term` in order; empty for unknown or blank terms.
    pub fn weeks(&self, term: &str) -> &[CalendarWeek] {
        self.terms
            .get(&TermKey::new(term))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks a week up by its selector (`SEMANA 3`, `semana 3`, `WEEK 3`).
    pub fn week(&self, term: &str, week_label: &str) -> Option<&CalendarWeek> {
        let number = parse_week_number(week_label)?;
        self.weeks(term).iter().find(|week| week.number == number)
    }

    /// The term and week whose date range contains `date`.
    pub fn week_for_date(&self, date: NaiveDate) -> Option<(&TermKey, &CalendarWeek)> {
        self.terms.iter().find_map(|(term, weeks)| {
            weeks
                .iter()
                .find(|week| week.range.contains(date))
                .map(|week| (term, week))
        })
    }

    /// Terms whose listed weeks disagree with the allocation policy.
    pub fn verify(&self) -> Vec<WeekCountMismatch> {
        self.terms
            .iter()
            .filter_map(|(term, weeks)| {
                let policy_weeks = self.policy.weeks_in_term(term.as_str());
                (weeks.len() != policy_weeks).then(|| WeekCountMismatch {
                    term: term.clone(),
                    calendar_weeks: weeks.len(),
                    policy_weeks,
                })
            })
            .collect()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::empty()
    }
}

fn parse_term_weeks(key: &TermKey, term: &TermDocument) -> Result<Vec<CalendarWeek>, CalendarError> {
    let mut weeks: Vec<CalendarWeek> = Vec::with_capacity(term.weeks.len());
    for week in &term.weeks {
        let label = week.label.trim().to_string();
        let Some(number) = parse_week_number(&label) else {
            return Err(CalendarError::InvalidWeekLabel {
                term: key.to_string(),
                week: label,
            });
        };
        if weeks.iter().any(|existing| existing.number == number) {
            return Err(CalendarError::DuplicateWeek {
                term: key.to_string(),
                week: label,
            });
        }
        let start = parse_date(key, &label, &week.start)?;
        let end = parse_date(key, &label, &week.end)?;
        let Some(range) = DateRange::new(start, end) else {
            return Err(CalendarError::ReversedRange {
                term: key.to_string(),
                week: label,
            });
        };
        weeks.push(CalendarWeek {
            label,
            number,
            range,
        });
    }
    weeks.sort_by_key(|week| week.number);
    Ok(weeks)
}

fn parse_date(term: &TermKey, week: &str, raw: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| CalendarError::InvalidDate {
        term: term.to_string(),
        week: week.to_string(),
        value: raw.to_string(),
    })
}

static DEFAULT_CALENDAR: OnceLock<Calendar> = OnceLock::new();

/// Process-wide calendar, loaded on first access and read-only afterwards.
///
/// Uses the file named by `AULA_CALENDAR` when set; if that file cannot be
/// loaded the embedded calendar is used instead.
pub fn default_calendar() -> &'static Calendar {
    DEFAULT_CALENDAR.get_or_init(load_default_calendar)
}

fn load_default_calendar() -> Calendar {
    if let Some(path) = calendar_override() {
        match Calendar::load(&path) {
            Ok(calendar) => return calendar,
            Err(error) => {
                warn!(path = %path.display(), %error, "calendar override unusable, using embedded calendar");
            }
        }
    }
    Calendar::embedded().unwrap_or_else(|error| {
        warn!(%error, "embedded calendar unusable, using an empty calendar");
        Calendar::empty()
    })
}
