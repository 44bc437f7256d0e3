//! Command-line front end for the lesson-plan reconciler.

#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
