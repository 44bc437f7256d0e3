#![deny(unsafe_code)]

//! Form field matching and form editor value composition.

pub mod compose;
pub mod matcher;
pub mod normalize;

pub use compose::{
    FieldPartition, WEEKLY_ENTRY_LABELS, WeekContext, WeeklyEntry, WeeklySlot,
    compose_weekly_entries, is_weekly_entry_label, partition_fields, prefill_global,
};
pub use matcher::{
    FieldMatch, FieldMatcher, MatchOutcome, WEEKLY_LABELS, is_weekly_label, match_across_rows,
    match_fields,
};
pub use normalize::{normalize, normalize_str};
