#![deny(unsafe_code)]

//! Lesson distribution over term weeks and the filter cascade built on it.

pub mod cascade;
pub mod distribution;

pub use cascade::{
    derive_available_terms, derive_available_weeks, filter_rows, lessons_present,
    on_term_changed, on_week_changed, on_week_changed_with, total_lessons,
};
pub use distribution::{
    Distributor, all_week_distributions, distribute, lessons_for_week, weeks_in_term,
};
