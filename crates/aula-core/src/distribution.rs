//! Even distribution of a term's lessons over its weeks.
//!
//! `total` lessons numbered `1..=total` are split over the term's weeks in
//! consecutive blocks. With `base = total / weeks` and
//! `remainder = total % weeks`, the first `remainder` weeks receive
//! `base + 1` lessons and the others `base`.

use aula_calendar::{WeekPolicy, default_calendar};
use aula_model::{WeekDistribution, parse_week_number};

/// Distributes lessons using the week counts of a given policy.
#[derive(Debug, Clone, Copy)]
pub struct Distributor<'a> {
    policy: &'a WeekPolicy,
}

impl<'a> Distributor<'a> {
    pub fn new(policy: &'a WeekPolicy) -> Self {
        Self { policy }
    }

    /// Distributor over the process-wide calendar's policy.
    pub fn from_default_calendar() -> Distributor<'static> {
        Distributor::new(default_calendar().policy())
    }

    pub fn weeks_in_term(&self, term: &str) -> usize {
        self.policy.weeks_in_term(term)
    }

    /// Lessons of the week named by `week_label` (`SEMANA n`).
    ///
    /// Unparseable labels and weeks outside the term yield an empty list.
    pub fn lessons_for_week(&self, term: &str, week_label: &str, total: u32) -> Vec<u32> {
        let Some(number) = parse_week_number(week_label) else {
            return Vec::new();
        };
        let Some(index) = (number as usize).checked_sub(1) else {
            return Vec::new();
        };
        let weeks = self.weeks_in_term(term);
        if index >= weeks {
            return Vec::new();
        }
        week_block(index, weeks, total).lesson_numbers
    }

    pub fn all_week_distributions(&self, term: &str, total: u32) -> Vec<WeekDistribution> {
        distribute(self.weeks_in_term(term), total)
    }
}

/// Splits `1..=total` over `weeks` weeks. Zero weeks yield no distribution.
pub fn distribute(weeks: usize, total: u32) -> Vec<WeekDistribution> {
    (0..weeks)
        .map(|index| week_block(index, weeks, total))
        .collect()
}

fn week_block(index: usize, weeks: usize, total: u32) -> WeekDistribution {
    let weeks = weeks as u64;
    let index_u64 = index as u64;
    let total = u64::from(total);
    let base = total / weeks;
    let remainder = total % weeks;
    let count = base + u64::from(index_u64 < remainder);
    let start = index_u64 * base + index_u64.min(remainder) + 1;
    let end = start + count - 1;
    WeekDistribution {
        week_index: index,
        lesson_numbers: (start..=end).map(|lesson| lesson as u32).collect(),
        start_lesson: start as u32,
        end_lesson: end as u32,
    }
}

/// Weeks in `term` according to the default calendar.
pub fn weeks_in_term(term: &str) -> usize {
    Distributor::from_default_calendar().weeks_in_term(term)
}

/// Lessons of one week according to the default calendar.
pub fn lessons_for_week(term: &str, week_label: &str, total: u32) -> Vec<u32> {
    Distributor::from_default_calendar().lessons_for_week(term, week_label, total)
}

/// Every week's block according to the default calendar.
pub fn all_week_distributions(term: &str, total: u32) -> Vec<WeekDistribution> {
    Distributor::from_default_calendar().all_week_distributions(term, total)
}
