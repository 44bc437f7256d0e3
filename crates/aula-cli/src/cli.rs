//! Command-line arguments for `teacher-hub`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "teacher-hub",
    version,
    about = "Teacher Hub - Reconcile lesson-plan spreadsheets with weekly plan forms",
    long_about = "Reconcile lesson-plan spreadsheets with weekly plan forms.\n\n\
                  Lists sheets and filter options, shows the school calendar, splits a\n\
                  term's lessons across its weeks and prefills form fields for a week."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// School calendar TOML file (default: AULA_CALENDAR or the built-in calendar).
    #[arg(long = "calendar", value_name = "PATH", global = true)]
    pub calendar: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sheets of a spreadsheet.
    Sheets(SheetsArgs),

    /// Show the periods, terms and lessons found in a sheet.
    Options(OptionsArgs),

    /// Show the calendar weeks of one term, or of every term.
    Weeks(WeeksArgs),

    /// Split a term's lessons across its weeks.
    Distribute(DistributeArgs),

    /// Prefill form fields for the lessons of one week.
    Fill(FillArgs),
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// Spreadsheet file (xlsx, xls, ods or csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sheet to read; a CSV file has one sheet named after the file.
    #[arg(long = "sheet")]
    pub sheet: String,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct WeeksArgs {
    /// Term ("bimestre"), e.g. 1 or 3º. Omit to list every term.
    #[arg(long = "term")]
    pub term: Option<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct DistributeArgs {
    #[arg(long = "term")]
    pub term: String,

    /// Number of lessons in the term.
    #[arg(long = "total")]
    pub total: u32,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct FillArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long = "sheet")]
    pub sheet: String,

    /// JSON list of form fields: `[{"id": ..., "label": ..., "type": ...}]`.
    #[arg(long = "fields", value_name = "PATH")]
    pub fields: PathBuf,

    #[arg(long = "term")]
    pub term: String,

    /// Week label, e.g. "SEMANA 2".
    #[arg(long = "week")]
    pub week: String,

    /// School year to keep ("ano/série"); repeat for several. Defaults to all.
    #[arg(long = "period", value_name = "PERIOD")]
    pub periods: Vec<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
