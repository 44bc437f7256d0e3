#![deny(unsafe_code)]

pub mod columns;
pub mod error;
pub mod form;
pub mod ids;
pub mod schedule;
pub mod selection;
pub mod table;

pub use columns::LessonColumns;
pub use error::{ModelError, Result};
pub use form::{FieldType, FieldValueMap, FormField, parse_form_fields};
pub use ids::{TermKey, parse_week_number, week_label};
pub use schedule::{WeekDistribution, WeekOption};
pub use selection::{FilterOptions, FilterSelection};
pub use table::{CellValue, DataRow};
