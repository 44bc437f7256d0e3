//! Sheet listing and reading for workbooks and CSV files.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use aula_model::CellValue;

use crate::csv_table::{normalize_header, read_csv_sheet};
use crate::error::{IngestError, Result};

/// Spreadsheet container, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Any format calamine opens: xlsx, xlsm, xlsb, xls, ods.
    Workbook,
    /// Plain CSV, exposed as one sheet named after the file stem.
    Csv,
}

impl SourceFormat {
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Header row plus data rows of one sheet.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Sheet names in workbook order.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    match SourceFormat::detect(path)? {
        SourceFormat::Csv => Ok(vec![csv_sheet_name(path)]),
        SourceFormat::Workbook => {
            let workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;
            let names = workbook.sheet_names();
            debug!(path = %path.display(), sheets = names.len(), "listed sheets");
            Ok(names)
        }
    }
}

/// Reads one sheet. The first non-blank row is the header row.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    ensure_exists(path)?;
    let table = match SourceFormat::detect(path)? {
        SourceFormat::Csv => {
            if sheet != csv_sheet_name(path) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                });
            }
            read_csv_sheet(path, sheet)?
        }
        SourceFormat::Workbook => read_workbook_sheet(path, sheet)?,
    };
    info!(
        path = %path.display(),
        sheet,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read sheet"
    );
    Ok(table)
}

fn read_workbook_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range
        .rows()
        .filter(|row| !row.iter().all(|cell| workbook_cell(cell).is_empty()));
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&workbook_cell(cell).to_string()))
        .collect();
    let rows = rows
        .map(|row| {
            (0..headers.len())
                .map(|idx| row.get(idx).map(workbook_cell).unwrap_or(CellValue::Empty))
                .collect()
        })
        .collect();
    Ok(SheetTable { headers, rows })
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::number(*value),
        Data::String(value) => CellValue::text(value.trim()),
        Data::Bool(value) => CellValue::text(if *value { "TRUE" } else { "FALSE" }),
        Data::Empty | Data::Error(_) => CellValue::Empty,
        other => CellValue::text(other.to_string()),
    }
}

/// Parses a text cell, turning plain numbers into numeric cells.
///
/// Values with a leading zero (codes such as `007`) stay text.
pub(crate) fn text_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    let looks_numeric = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-')
        && trimmed.chars().any(|ch| ch.is_ascii_digit());
    let leading_zero = trimmed.len() > 1 && trimmed.starts_with('0') && !trimmed.starts_with("0.");
    if looks_numeric
        && !leading_zero
        && let Ok(value) = trimmed.parse::<f64>()
    {
        return CellValue::number(value);
    }
    CellValue::text(trimmed)
}

fn csv_sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
