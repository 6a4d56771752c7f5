//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnxty` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing error reporting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process;

use dnxty::error_handling::{InputError, ProcessingStats};
use dnxty::initialization::{init_logger_with, init_resolver};
use dnxty::input::gather_domains;
use dnxty::output::print_results;
use dnxty::run::{print_statistics, run_extraction};
use dnxty::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.color_enabled() {
        colored::control::set_override(false);
    }

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let domains = match gather_domains(cli.file.as_deref(), &cli.domains).await {
        Ok(domains) => domains,
        Err(e) => {
            if cli.color_enabled() {
                eprintln!("{}", e.to_string().red());
            } else {
                eprintln!("{e}");
            }
            if matches!(e, InputError::NoDomains) {
                let _ = Cli::command().write_help(&mut std::io::stderr());
            }
            process::exit(1);
        }
    };

    let resolver = init_resolver(cli.timeout).context("Failed to initialize DNS resolver")?;
    let filter = cli.filter_config();
    let stats = ProcessingStats::new();

    let report = run_extraction(&domains, &resolver, &filter, &stats).await;
    print_statistics(&stats);

    let options = cli.render_options();
    print_results(&report.into_results(filter.simple_mode), &options)
        .context("Failed to write results")?;

    Ok(())
}
