use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use aula_calendar::{Calendar, default_calendar};
use aula_core::{
    Distributor, derive_available_terms, derive_available_weeks, filter_rows, lessons_present,
    on_term_changed, on_week_changed_with, total_lessons,
};
use aula_ingest::{list_sheets, load_lesson_rows};
use aula_map::{WeekContext, compose_weekly_entries, partition_fields, prefill_global};
use aula_model::{DataRow, FilterSelection, LessonColumns, TermKey, parse_form_fields};

use crate::cli::{DistributeArgs, FillArgs, OptionsArgs, SheetsArgs, WeeksArgs};
use crate::types::{DistributionReport, EntryReport, FillReport, OptionsReport, TermWeeks};

/// Calendar named on the command line, or the process default.
pub fn resolve_calendar(path: Option<&Path>) -> Result<Calendar> {
    match path {
        Some(path) => Calendar::load(path)
            .with_context(|| format!("load calendar {}", path.display())),
        None => Ok(default_calendar().clone()),
    }
}

pub fn run_sheets(args: &SheetsArgs) -> Result<Vec<String>> {
    list_sheets(&args.file).with_context(|| format!("list sheets of {}", args.file.display()))
}

pub fn run_options(args: &OptionsArgs) -> Result<OptionsReport> {
    let dataset = load_lesson_rows(&args.file, &args.sheet, &LessonColumns::default())
        .with_context(|| format!("read {}", args.file.display()))?;
    Ok(OptionsReport {
        sheet: dataset.sheet.clone(),
        rows: dataset.len(),
        dropped_rows: dataset.dropped_rows,
        options: dataset.filter_options(),
    })
}

pub fn run_weeks(args: &WeeksArgs, calendar: &Calendar) -> Result<Vec<TermWeeks>> {
    for mismatch in calendar.verify() {
        warn!(
            term = %mismatch.term,
            calendar_weeks = mismatch.calendar_weeks,
            policy_weeks = mismatch.policy_weeks,
            "calendar and week policy disagree"
        );
    }
    let terms: Vec<String> = match &args.term {
        Some(term) => vec![TermKey::new(term).to_string()],
        None => calendar.term_keys().map(ToString::to_string).collect(),
    };
    let mut listing = Vec::with_capacity(terms.len());
    for term in terms {
        let weeks = derive_available_weeks(calendar, Some(term.as_str()));
        if weeks.is_empty() {
            bail!("term {term:?} is not in calendar {:?}", calendar.name());
        }
        listing.push(TermWeeks { term, weeks });
    }
    Ok(listing)
}

pub fn run_distribute(args: &DistributeArgs, calendar: &Calendar) -> Result<DistributionReport> {
    let term = TermKey::new(&args.term);
    if term.is_empty() {
        bail!("term must not be empty");
    }
    let distributor = Distributor::new(calendar.policy());
    let weeks = distributor.all_week_distributions(term.as_str(), args.total);
    info!(term = %term, total = args.total, weeks = weeks.len(), "distributed lessons");
    Ok(DistributionReport {
        term: term.to_string(),
        total: args.total,
        weeks,
    })
}

/// Runs the filter cascade for one week and prefills the form from its rows.
pub fn run_fill(args: &FillArgs, calendar: &Calendar) -> Result<FillReport> {
    let span = info_span!("fill", sheet = %args.sheet, term = %args.term, week = %args.week);
    let _guard = span.enter();

    let raw_fields = fs::read_to_string(&args.fields)
        .with_context(|| format!("read form fields {}", args.fields.display()))?;
    let fields = parse_form_fields(&raw_fields)
        .with_context(|| format!("parse form fields {}", args.fields.display()))?;
    let columns = LessonColumns::default();
    let dataset = load_lesson_rows(&args.file, &args.sheet, &columns)
        .with_context(|| format!("read {}", args.file.display()))?;

    let selection = FilterSelection::default().with_periods(args.periods.iter().map(String::as_str));
    let term = TermKey::new(&args.term);
    let available = derive_available_terms(&dataset.rows, &selection.periods, &columns);
    if !available.iter().any(|candidate| TermKey::new(candidate) == term) {
        let available: Vec<&str> = available.iter().map(String::as_str).collect();
        bail!(
            "term {:?} has no lessons for the selected periods (available: {})",
            args.term,
            available.join(", ")
        );
    }

    let selection = on_term_changed(&selection, Some(args.term.as_str()));
    let present = lessons_present(&dataset.rows, &selection, &columns);
    let total = total_lessons(&dataset.rows, &selection, &columns);
    let selection = on_week_changed_with(
        calendar.policy(),
        &selection,
        Some(args.week.as_str()),
        total,
        &present,
    );
    if selection.lessons.is_empty() {
        warn!(total, "week selects no lessons");
    }
    debug!(lessons = ?selection.lessons, total, "selected week lessons");

    let rows: Vec<DataRow> = filter_rows(&dataset.rows, &selection, &columns)
        .into_iter()
        .cloned()
        .collect();
    let partition = partition_fields(&fields);
    let global = prefill_global(&partition.global, rows.first(), &dataset.sheet);

    let date_range = calendar
        .week(&args.term, &args.week)
        .map(|week| week.range.short());
    if date_range.is_none() {
        warn!("week is not in the calendar; lesson dates left empty");
    }
    let context = WeekContext::new(date_range.clone(), columns);
    let entries = compose_weekly_entries(&partition.weekly, &rows, &context)
        .into_iter()
        .map(|entry| EntryReport {
            lesson: entry.lesson,
            values: entry.values,
        })
        .collect();
    info!(
        rows = rows.len(),
        global_fields = partition.global.len(),
        weekly_fields = partition.weekly.len(),
        "prefilled form"
    );

    Ok(FillReport {
        sheet: dataset.sheet,
        term: term.to_string(),
        week: args.week.trim().to_string(),
        date_range,
        periods: selection.periods.into_iter().collect(),
        lessons: selection.lessons.into_iter().collect(),
        global,
        entries,
    })
}
