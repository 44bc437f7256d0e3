use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::sheet::{SheetTable, text_cell};

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file as a single sheet; the first non-blank row is the header.
pub(crate) fn read_csv_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut raw_rows = raw_rows.into_iter();
    let Some(header_row) = raw_rows.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let rows = raw_rows
        .map(|record| {
            (0..headers.len())
                .map(|idx| text_cell(record.get(idx).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();
    Ok(SheetTable { headers, rows })
}
