#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse calendar {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date {value:?} in term {term}, {week} (expected dd/mm/yyyy)")]
    InvalidDate {
        term: String,
        week: String,
        value: String,
    },

    #[error("date range of term {term}, {week} ends before it starts")]
    ReversedRange { term: String, week: String },

    #[error("week label {week:?} in term {term} is not of the form SEMANA <n>")]
    InvalidWeekLabel { term: String, week: String },

    #[error("duplicate term in calendar: {term}")]
    DuplicateTerm { term: String },

    #[error("duplicate week {week} in term {term}")]
    DuplicateWeek { term: String, week: String },

    #[error("week count for {scope} must be at least 1")]
    InvalidWeekCount { scope: String },
}

impl CalendarError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
