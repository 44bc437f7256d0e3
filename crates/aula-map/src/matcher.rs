//! Form field to spreadsheet column matching.
//!
//! Each form field is resolved against one lesson row by comparing normalized
//! label and column text. Matching is containment in either direction; there
//! is no scoring and the first column in row order wins.

use tracing::{debug, trace};

use aula_model::{DataRow, FieldValueMap, FormField};

use crate::normalize::normalize_str;

/// Labels of fields that are filled once per lesson of the selected week.
///
/// These fields are always present in the matcher output, even when no
/// column matches them.
pub const WEEKLY_LABELS: [&str; 5] = [
    "DATA DA AULA DA SEMANA",
    "CONTEÚDOS/OBJETOS DE CONHECIMENTO",
    "HABILIDADES",
    "UNIDADE TEMÁTICA",
    "NÚMERO DE AULA PREVISTA",
];

/// Whether `label` is one of [`WEEKLY_LABELS`] (trimmed, case-insensitive).
pub fn is_weekly_label(label: &str) -> bool {
    let upper = label.trim().to_uppercase();
    WEEKLY_LABELS.contains(&upper.as_str())
}

/// How a single field was resolved against a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Label and column name contain one another.
    Column { column: String },
    /// Checkbox label contains the cell value.
    CheckboxValue { column: String },
    /// Weekly field with no matching column.
    WeeklyFallback,
    /// No value; the field is left out of the output.
    Unresolved,
}

/// A field's outcome together with the value bound to it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field_id: String,
    pub outcome: MatchOutcome,
    pub value: Option<String>,
}

#[derive(Debug, Clone)]
struct PreparedField {
    field: FormField,
    normalized_label: String,
    weekly: bool,
}

/// Matcher over a fixed field list, with labels normalized once.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    fields: Vec<PreparedField>,
}

impl FieldMatcher {
    pub fn new(fields: &[FormField]) -> Self {
        let fields = fields
            .iter()
            .map(|field| PreparedField {
                normalized_label: normalize_str(&field.label),
                weekly: is_weekly_label(&field.label),
                field: field.clone(),
            })
            .collect();
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Per-field outcomes for `row`, in field declaration order.
    pub fn resolve(&self, row: &DataRow) -> Vec<FieldMatch> {
        let columns: Vec<(&str, String, String, String)> = row
            .iter()
            .map(|(column, value)| {
                let rendered = value.to_string();
                (
                    column,
                    normalize_str(column),
                    normalize_str(&rendered),
                    rendered,
                )
            })
            .collect();

        self.fields
            .iter()
            .map(|prepared| {
                let label = prepared.normalized_label.as_str();
                let hit = columns.iter().find_map(|(column, norm_column, norm_value, rendered)| {
                    if contains_either(label, norm_column) {
                        Some((
                            MatchOutcome::Column {
                                column: (*column).to_string(),
                            },
                            rendered.clone(),
                        ))
                    } else if prepared.field.is_checkbox()
                        && !norm_value.is_empty()
                        && label.contains(norm_value.as_str())
                    {
                        Some((
                            MatchOutcome::CheckboxValue {
                                column: (*column).to_string(),
                            },
                            rendered.clone(),
                        ))
                    } else {
                        None
                    }
                });

                let (outcome, value) = match hit {
                    Some((outcome, value)) => (outcome, Some(value)),
                    // Headers are trimmed on ingestion, so the lookup key is too.
                    // A column named exactly like the label has already matched
                    // by containment, so this is normally empty.
                    None if prepared.weekly => (
                        MatchOutcome::WeeklyFallback,
                        Some(row.text(prepared.field.label.trim())),
                    ),
                    None => (MatchOutcome::Unresolved, None),
                };
                debug!(field = %prepared.field.id, label = %prepared.field.label, ?outcome, "field resolved");
                if let Some(value) = &value {
                    trace!(field = %prepared.field.id, %value, "field value");
                }
                FieldMatch {
                    field_id: prepared.field.id.clone(),
                    outcome,
                    value,
                }
            })
            .collect()
    }

    /// Field values for one row; unresolved fields are absent.
    pub fn match_row(&self, row: &DataRow) -> FieldValueMap {
        self.resolve(row)
            .into_iter()
            .filter_map(|matched| matched.value.map(|value| (matched.field_id, value)))
            .collect()
    }

    pub fn match_rows(&self, rows: &[DataRow]) -> Vec<FieldValueMap> {
        rows.iter().map(|row| self.match_row(row)).collect()
    }
}

/// Substring test in both directions.
///
/// An empty side never matches: a plain `contains` would let a header that
/// normalizes to nothing (`#`, `-`) or a blank cell bind every field.
fn contains_either(label: &str, column: &str) -> bool {
    if label.is_empty() || column.is_empty() {
        return false;
    }
    label.contains(column) || column.contains(label)
}

/// Resolves `fields` against a single row.
pub fn match_fields(fields: &[FormField], row: &DataRow) -> FieldValueMap {
    FieldMatcher::new(fields).match_row(row)
}

/// Resolves `fields` against each row, preserving row order.
pub fn match_across_rows(fields: &[FormField], rows: &[DataRow]) -> Vec<FieldValueMap> {
    FieldMatcher::new(fields).match_rows(rows)
}
