mod analyzer;
mod cli;
mod commands;
mod config;
mod fs_scanner;
mod models;
mod ui;

use anyhow::Result;
use clap::{crate_name, Parser};
use std::process::ExitCode;

use crate::cli::Cli;

fn init_logger(cli: &Cli) -> Result<()> {
    let crate_name = crate_name!();
    let mut logger_builder = pretty_env_logger::formatted_builder();

    // stderr carries unreadable paths; keep it quiet unless asked
    let default_log_level = log::LevelFilter::Warn;
    logger_builder.filter_module(crate_name, default_log_level);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        logger_builder.parse_filters(&filter);
    }
    if cli.verbose != 0 {
        let mut iter = log::LevelFilter::iter().fuse();
        iter.find(|level| *level == default_log_level);
        for _ in 0..(cli.verbose - 1) {
            iter.next();
        }
        let level = iter.next().unwrap_or(log::LevelFilter::max());
        logger_builder.filter_module(crate_name, level);
    }
    if let Some(level) = cli.log_level {
        logger_builder.filter_module(crate_name, level);
    }
    logger_builder.try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    // Bare invocation is an error with no output at all.
    if std::env::args_os().len() < 2 {
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_logger(&cli) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    log::trace!("parsed options: {cli:#?}");

    match commands::scan::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if ui::is_broken_pipe(&err) => {
            log::debug!("output closed early: {err:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
