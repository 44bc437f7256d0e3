#![deny(unsafe_code)]

pub mod calendar;
pub mod document;
pub mod error;
pub mod paths;
pub mod policy;

pub use crate::calendar::{
    Calendar, CalendarWeek, DateRange, WeekCountMismatch, default_calendar,
};
pub use crate::error::CalendarError;
pub use crate::paths::{CALENDAR_ENV_VAR, calendar_override};
pub use crate::policy::WeekPolicy;
