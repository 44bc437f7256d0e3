//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Spreadsheet file not found.
    #[error("spreadsheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Extension is not one of the supported spreadsheet formats.
    #[error("unsupported spreadsheet format: {path} (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to open or decode a workbook.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Sheet Errors ===
    /// Requested sheet does not exist in the workbook.
    #[error("sheet not found: {sheet} in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Sheet has no header row.
    #[error("sheet {sheet} in {path} is empty")]
    EmptySheet { path: PathBuf, sheet: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
