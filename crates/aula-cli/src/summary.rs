use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use aula_model::WeekDistribution;

use crate::types::{DistributionReport, FillReport, OptionsReport, TermWeeks};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Wide layout for form values, which can hold long content strings.
fn apply_entry_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 2 {
        let mut constraints = vec![ColumnConstraint::UpperBoundary(Width::Fixed(12))];
        constraints.extend(
            (1..table.column_count())
                .map(|_| ColumnConstraint::UpperBoundary(Width::Percentage(60))),
        );
        table.set_constraints(constraints);
    }
}

pub fn sheets_table(sheets: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Sheet")]);
    apply_table_style(&mut table);
    for (index, sheet) in sheets.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(sheet)]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn options_table(report: &OptionsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Filter"), header_cell("Values")]);
    apply_table_style(&mut table);
    let options = &report.options;
    table.add_row(vec![Cell::new("Periods"), list_cell(&options.periods)]);
    table.add_row(vec![Cell::new("Terms"), list_cell(&options.terms)]);
    table.add_row(vec![Cell::new("Lessons"), Cell::new(lesson_span(&options.lessons))]);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(format!(
            "{} kept, {} without lesson",
            report.rows, report.dropped_rows
        )),
    ]);
    table
}

pub fn weeks_table(listing: &[TermWeeks]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Week"),
        header_cell("Dates"),
    ]);
    apply_table_style(&mut table);
    for term in listing {
        for (index, week) in term.weeks.iter().enumerate() {
            let term_cell = if index == 0 {
                Cell::new(&term.term).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                term_cell,
                Cell::new(&week.label),
                Cell::new(&week.date_range),
            ]);
        }
    }
    table
}

pub fn distribution_table(report: &DistributionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Week"),
        header_cell("Lessons"),
        header_cell("Range"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    for week in &report.weeks {
        table.add_row(vec![
            Cell::new(week.label()),
            Cell::new(join_numbers(&week.lesson_numbers)),
            range_cell(week),
            count_cell(week.len()),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

/// Global field values, then one row per lesson with its weekly values.
pub fn fill_tables(report: &FillReport) -> (Table, Table) {
    let mut global = Table::new();
    global.set_header(vec![header_cell("Field"), header_cell("Value")]);
    for (id, value) in report.global.iter() {
        global.add_row(vec![Cell::new(id), value_cell(value)]);
    }
    apply_table_style(&mut global);

    let weekly_ids: Vec<&str> = report
        .entries
        .first()
        .map(|entry| entry.values.iter().map(|(id, _)| id).collect())
        .unwrap_or_default();
    let mut entries = Table::new();
    let mut header = vec![header_cell("Lesson")];
    header.extend(weekly_ids.iter().map(|id| header_cell(id)));
    entries.set_header(header);
    for entry in &report.entries {
        let mut row = vec![match entry.lesson {
            Some(lesson) => Cell::new(lesson),
            None => dim_cell("-"),
        }];
        row.extend(
            weekly_ids
                .iter()
                .map(|id| value_cell(entry.values.get(id).unwrap_or_default())),
        );
        entries.add_row(row);
    }
    apply_entry_table_style(&mut entries);
    align_column(&mut entries, 0, CellAlignment::Right);
    (global, entries)
}

/// One-line heading printed above the fill tables.
pub fn fill_heading(report: &FillReport) -> String {
    let dates = report.date_range.as_deref().unwrap_or("no dates");
    format!(
        "{} | term {} | {} ({}) | lessons: {}",
        report.sheet,
        report.term,
        report.week,
        dates,
        lesson_span(&report.lessons)
    )
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn list_cell(values: &[String]) -> Cell {
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join(", "))
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Green)
    }
}

fn range_cell(week: &WeekDistribution) -> Cell {
    if week.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format!("{}-{}", week.start_lesson, week.end_lesson))
    }
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `1-23` for a consecutive run, the full list otherwise, `-` when empty.
fn lesson_span(lessons: &[u32]) -> String {
    let consecutive = lessons.windows(2).all(|pair| pair[0].checked_add(1) == Some(pair[1]));
    match (lessons.first(), lessons.last()) {
        (Some(first), Some(last)) if lessons.len() > 1 && consecutive => format!("{first}-{last}"),
        (Some(_), Some(_)) => join_numbers(lessons),
        _ => "-".to_string(),
    }
}
