//! Filter state shared between the cascade and its callers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Hierarchical filter selection: periods, then one term, then one week and
/// the lessons it implies.
///
/// Week and lessons only carry meaning while a term is selected. The cascade
/// clears both whenever the term changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub periods: BTreeSet<String>,
    pub term: Option<String>,
    pub lessons: BTreeSet<u32>,
    pub week: Option<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn with_periods<I, S>(mut self, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.periods = periods.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the term directly, without the cascading reset.
    ///
    /// Use `aula_core::cascade::on_term_changed` for user-driven changes.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    #[must_use]
    pub fn with_lessons<I: IntoIterator<Item = u32>>(mut self, lessons: I) -> Self {
        self.lessons = lessons.into_iter().collect();
        self
    }

    pub fn has_term(&self) -> bool {
        self.term.as_deref().is_some_and(|term| !term.trim().is_empty())
    }
}

/// Distinct filter values present in an uploaded sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Periods in first-seen order.
    pub periods: Vec<String>,
    /// Terms in first-seen order.
    pub terms: Vec<String>,
    /// Lesson numbers, ascending.
    pub lessons: Vec<u32>,
}
