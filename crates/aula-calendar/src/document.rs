#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::policy::WeekPolicy;

/// On-disk calendar layout (TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDocument {
    #[serde(default)]
    pub calendar: CalendarHeader,
    #[serde(default)]
    pub distribution: WeekPolicy,
    #[serde(default)]
    pub terms: Vec<TermDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarHeader {
    #[serde(default)]
    pub name: String,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDocument {
    pub key: String,
    #[serde(default)]
    pub weeks: Vec<WeekDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDocument {
    pub label: String,
    /// `dd/mm/yyyy`
    pub start: String,
    /// `dd/mm/yyyy`
    pub end: String,
}
