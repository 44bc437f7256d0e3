//! Calendar file resolution.

use std::path::PathBuf;

/// Environment variable pointing at a calendar TOML that replaces the embedded one.
pub const CALENDAR_ENV_VAR: &str = "AULA_CALENDAR";

/// Path of the calendar override, if `AULA_CALENDAR` is set and non-empty.
///
/// # Example
///
/// ```rust,ignore
/// if let Some(path) = aula_calendar::calendar_override() {
///     let calendar = aula_calendar::Calendar::load(&path)?;
/// }
/// ```
pub fn calendar_override() -> Option<PathBuf> {
    std::env::var_os(CALENDAR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
