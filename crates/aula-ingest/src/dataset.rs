//! Lesson rows loaded from one sheet of a lesson-plan spreadsheet.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, info_span};

use aula_model::{CellValue, DataRow, FilterOptions, LessonColumns};

use crate::error::Result;
use crate::sheet::{SheetTable, read_sheet};

/// Rows of one sheet, ready for the filter cascade.
#[derive(Debug, Clone, Default)]
pub struct LessonDataset {
    /// Sheet the rows came from; also the subject ("componente curricular").
    pub sheet: String,
    pub columns: LessonColumns,
    pub rows: Vec<DataRow>,
    /// Rows skipped because their lesson cell was empty.
    pub dropped_rows: usize,
}

impl LessonDataset {
    /// Builds lesson rows from a sheet table.
    ///
    /// Rows without a lesson number are dropped. The lesson cell becomes an
    /// integer when it holds one, and an empty component cell is filled with
    /// the sheet name.
    pub fn from_table(table: SheetTable, sheet: &str, columns: LessonColumns) -> Self {
        let mut rows = Vec::with_capacity(table.rows.len());
        let mut dropped_rows = 0usize;
        for cells in table.rows {
            let mut row: DataRow = table
                .headers
                .iter()
                .zip(cells)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), cell))
                .collect();

            let lesson_cell = row.get(&columns.lesson).cloned().unwrap_or(CellValue::Empty);
            if lesson_cell.is_empty() {
                dropped_rows += 1;
                continue;
            }
            if let Some(lesson) = lesson_cell.as_lesson_number() {
                row.insert(columns.lesson.clone(), CellValue::Integer(i64::from(lesson)));
            }

            let component = row.text(&columns.component).trim().to_string();
            let component = if component.is_empty() {
                sheet.trim().to_string()
            } else {
                component
            };
            row.insert(columns.component.clone(), CellValue::text(component));
            rows.push(row);
        }
        debug!(sheet, kept = rows.len(), dropped = dropped_rows, "built lesson rows");
        Self {
            sheet: sheet.to_string(),
            columns,
            rows,
            dropped_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct periods and terms in first-seen order, and sorted lesson numbers.
    pub fn filter_options(&self) -> FilterOptions {
        let mut options = FilterOptions::default();
        let mut lessons = BTreeSet::new();
        for row in &self.rows {
            let period = row.period(&self.columns);
            if !period.is_empty() && !options.periods.contains(&period) {
                options.periods.push(period);
            }
            let term = row.term(&self.columns);
            if !term.is_empty() && !options.terms.contains(&term) {
                options.terms.push(term);
            }
            if let Some(lesson) = row.lesson_number(&self.columns) {
                lessons.insert(lesson);
            }
        }
        options.lessons = lessons.into_iter().collect();
        options
    }
}

/// Reads `sheet` from `path` and keeps only rows that carry a lesson.
pub fn load_lesson_rows(path: &Path, sheet: &str, columns: &LessonColumns) -> Result<LessonDataset> {
    let span = info_span!("load_lesson_rows", path = %path.display(), sheet);
    let _guard = span.enter();
    let table = read_sheet(path, sheet)?;
    let dataset = LessonDataset::from_table(table, sheet, columns.clone());
    info!(
        rows = dataset.rows.len(),
        dropped = dataset.dropped_rows,
        "loaded lesson rows"
    );
    Ok(dataset)
}
