//! Clientbook CLI entry point.
//!
//! # Responsibility
//! - Parse arguments and initialize logging.
//! - Resolve the store path and hand off to the subcommand handlers.

#![forbid(unsafe_code)]

mod args;
mod commands;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Command};
use clap::Parser;
use clientbook_core::{init_logging, init_stderr_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let level = cli.effective_log_level().to_string();
    match &cli.log_dir {
        Some(dir) => init_logging(&level, dir),
        None => init_stderr_logging(&level),
    }
    .context("failed to initialize logging")?;
    log::debug!(
        "event=cli_start module=cli status=ok core_version={}",
        clientbook_core::core_version()
    );

    let mut stdout = std::io::stdout().lock();

    if let Command::Check { field, value } = &cli.command {
        return commands::run_check(field, value, &mut stdout);
    }

    let db_path = cli.db_path();
    commands::run_with_store(&db_path, cli.command, &mut stdout)
}
