//! Dependent filter options: periods narrow terms, a term enables weeks, and a
//! week selects its lessons.
//!
//! Every function here takes the current selection by reference and returns a
//! new one. Malformed input degrades to empty results.

use std::collections::BTreeSet;

use tracing::debug;

use aula_calendar::{Calendar, WeekPolicy};
use aula_model::{DataRow, FilterSelection, LessonColumns, TermKey, WeekOption};

use crate::distribution::{Distributor, lessons_for_week};

/// Terms offered for the selected periods.
///
/// With no period selected every term in the data is offered; otherwise only
/// terms of rows whose own period is selected. Terms are canonical keys, so
/// `1` and `1º` are offered once.
pub fn derive_available_terms(
    rows: &[DataRow],
    selected_periods: &BTreeSet<String>,
    columns: &LessonColumns,
) -> BTreeSet<String> {
    rows.iter()
        .filter(|row| period_selected(row, selected_periods, columns))
        .filter_map(|row| {
            let term = TermKey::new(&row.term(columns));
            (!term.is_empty()).then(|| term.to_string())
        })
        .collect()
}

/// Weeks of `term` with their full date ranges; empty when no term is set or
/// the calendar does not know it.
pub fn derive_available_weeks(calendar: &Calendar, term: Option<&str>) -> Vec<WeekOption> {
    let Some(term) = term.map(str::trim).filter(|term| !term.is_empty()) else {
        return Vec::new();
    };
    calendar
        .weeks(term)
        .iter()
        .map(|week| WeekOption {
            label: week.label.clone(),
            date_range: week.range.to_string(),
        })
        .collect()
}

/// Selects a term. Week and lessons always reset; periods are kept.
pub fn on_term_changed(selection: &FilterSelection, term: Option<&str>) -> FilterSelection {
    let term = term
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string);
    debug!(?term, "term changed");
    FilterSelection {
        periods: selection.periods.clone(),
        term,
        lessons: BTreeSet::new(),
        week: None,
    }
}

/// Selects a week and replaces the lesson selection with that week's lessons,
/// keeping only lessons present in the data. Uses the default calendar's
/// week counts.
pub fn on_week_changed(
    selection: &FilterSelection,
    week: Option<&str>,
    total_lessons: u32,
    present: &BTreeSet<u32>,
) -> FilterSelection {
    apply_week(selection, week, present, |term, week| {
        lessons_for_week(term, week, total_lessons)
    })
}

/// [`on_week_changed`] with explicit week counts.
pub fn on_week_changed_with(
    policy: &WeekPolicy,
    selection: &FilterSelection,
    week: Option<&str>,
    total_lessons: u32,
    present: &BTreeSet<u32>,
) -> FilterSelection {
    let distributor = Distributor::new(policy);
    apply_week(selection, week, present, |term, week| {
        distributor.lessons_for_week(term, week, total_lessons)
    })
}

fn apply_week<F>(
    selection: &FilterSelection,
    week: Option<&str>,
    present: &BTreeSet<u32>,
    lessons_of: F,
) -> FilterSelection
where
    F: Fn(&str, &str) -> Vec<u32>,
{
    let mut next = selection.clone();
    next.lessons.clear();
    next.week = None;

    let Some(term) = selection.term.as_deref().filter(|_| selection.has_term()) else {
        return next;
    };
    let Some(week) = week.map(str::trim).filter(|week| !week.is_empty()) else {
        return next;
    };
    next.lessons = lessons_of(term, week)
        .into_iter()
        .filter(|lesson| present.contains(lesson))
        .collect();
    debug!(term, week, lessons = next.lessons.len(), "week changed");
    next.week = Some(week.to_string());
    next
}

/// Lesson numbers in rows matching the selected periods and term.
pub fn lessons_present(
    rows: &[DataRow],
    selection: &FilterSelection,
    columns: &LessonColumns,
) -> BTreeSet<u32> {
    term_rows(rows, selection, columns)
        .filter_map(|row| row.lesson_number(columns))
        .collect()
}

/// Number of lessons in the selected term: its highest lesson number.
///
/// Lessons are numbered consecutively from 1, so gaps in the data do not
/// shrink the term.
pub fn total_lessons(rows: &[DataRow], selection: &FilterSelection, columns: &LessonColumns) -> u32 {
    lessons_present(rows, selection, columns)
        .last()
        .copied()
        .unwrap_or(0)
}

/// Rows matching every level of the selection: periods, term and lessons.
pub fn filter_rows<'a>(
    rows: &'a [DataRow],
    selection: &FilterSelection,
    columns: &LessonColumns,
) -> Vec<&'a DataRow> {
    term_rows(rows, selection, columns)
        .filter(|row| {
            row.lesson_number(columns)
                .is_some_and(|lesson| selection.lessons.contains(&lesson))
        })
        .collect()
}

fn term_rows<'a, 's>(
    rows: &'a [DataRow],
    selection: &'s FilterSelection,
    columns: &'s LessonColumns,
) -> impl Iterator<Item = &'a DataRow> {
    let term = selection
        .term
        .as_deref()
        .map(TermKey::new)
        .filter(|term| !term.is_empty());
    rows.iter().filter(move |row| {
        let Some(term) = &term else {
            return false;
        };
        period_selected(row, &selection.periods, columns) && TermKey::new(&row.term(columns)) == *term
    })
}

fn period_selected(row: &DataRow, selected: &BTreeSet<String>, columns: &LessonColumns) -> bool {
    if selected.is_empty() {
        return true;
    }
    let period = row.period(columns);
    selected.iter().any(|candidate| candidate.trim() == period)
}
