#![deny(unsafe_code)]

//! Lesson-plan spreadsheet ingestion.
//!
//! Workbooks (xlsx, xls, ods) are read with calamine; CSV files are read with
//! the `csv` crate and exposed as a single sheet named after the file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use aula_ingest::{list_sheets, load_lesson_rows};
//! use aula_model::LessonColumns;
//!
//! let path = Path::new("planos/2025.xlsx");
//! let sheets = list_sheets(path)?;
//! let dataset = load_lesson_rows(path, &sheets[0], &LessonColumns::default())?;
//! let options = dataset.filter_options();
//! ```

mod csv_table;
mod dataset;
mod error;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Reading ===
pub use sheet::{SheetTable, SourceFormat, list_sheets, read_sheet};

// === Lesson Rows ===
pub use dataset::{LessonDataset, load_lesson_rows};
