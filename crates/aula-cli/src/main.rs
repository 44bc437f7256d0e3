//! `teacher-hub` binary.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use aula_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use aula_cli::commands::{
    resolve_calendar, run_distribute, run_fill, run_options, run_sheets, run_weeks,
};
use aula_cli::logging::{LogConfig, LogFormat, init_logging};
use aula_cli::summary::{
    distribution_table, fill_heading, fill_tables, options_table, sheets_table, weeks_table,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Sheets(args) => {
            let sheets = run_sheets(args)?;
            println!("{}", sheets_table(&sheets));
        }
        Command::Options(args) => {
            let report = run_options(args)?;
            match args.format {
                OutputFormatArg::Table => println!("{}", options_table(&report)),
                OutputFormatArg::Json => print_json(&report)?,
            }
        }
        Command::Weeks(args) => {
            let calendar = resolve_calendar(cli.calendar.as_deref())?;
            let listing = run_weeks(args, &calendar)?;
            match args.format {
                OutputFormatArg::Table => println!("{}", weeks_table(&listing)),
                OutputFormatArg::Json => print_json(&listing)?,
            }
        }
        Command::Distribute(args) => {
            let calendar = resolve_calendar(cli.calendar.as_deref())?;
            let report = run_distribute(args, &calendar)?;
            match args.format {
                OutputFormatArg::Table => println!("{}", distribution_table(&report)),
                OutputFormatArg::Json => print_json(&report)?,
            }
        }
        Command::Fill(args) => {
            let calendar = resolve_calendar(cli.calendar.as_deref())?;
            let report = run_fill(args, &calendar)?;
            match args.format {
                OutputFormatArg::Table => {
                    let (global, entries) = fill_tables(&report);
                    println!("{}", fill_heading(&report));
                    println!("{global}");
                    println!("{entries}");
                }
                OutputFormatArg::Json => print_json(&report)?,
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
