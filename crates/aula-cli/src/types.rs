use serde::Serialize;

use aula_model::{FieldValueMap, FilterOptions, WeekDistribution, WeekOption};

#[derive(Debug, Clone, Serialize)]
pub struct OptionsReport {
    pub sheet: String,
    pub rows: usize,
    pub dropped_rows: usize,
    pub options: FilterOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermWeeks {
    pub term: String,
    pub weeks: Vec<WeekOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    pub term: String,
    pub total: u32,
    pub weeks: Vec<WeekDistribution>,
}

/// Prefilled form values for one week of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillReport {
    pub sheet: String,
    pub term: String,
    pub week: String,
    /// Short date range of the week, when the calendar knows it.
    pub date_range: Option<String>,
    pub periods: Vec<String>,
    pub lessons: Vec<u32>,
    pub global: FieldValueMap,
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub lesson: Option<u32>,
    pub values: FieldValueMap,
}
