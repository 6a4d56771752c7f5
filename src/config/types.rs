//! Configuration types and CLI options.
//!
//! This module defines the enums and the `clap` parser used for command-line
//! argument parsing, and the conversions from parsed options into the
//! settings consumed by the extraction pipeline and the renderer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_TIMEOUT_SECS, HELP_EXAMPLES};
use crate::models::FilterConfig;
use crate::output::{OutputFormat, RenderOptions};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dnxty",
    version,
    about = "dnxty - A DNS TXT Record Extraction Utility",
    after_help = HELP_EXAMPLES
)]
pub struct Cli {
    /// Domains to query (queried after any domains read from --file)
    #[arg(value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Path to a text file containing domain names (one domain per line, `-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format. Options: pretty (default), json, yaml, csv
    #[arg(long, default_value = "pretty")]
    pub format: String,

    /// Disable colored output and syntax highlighting
    #[arg(long)]
    pub no_color: bool,

    /// Include all TXT records, even those without a valid key/value pair
    #[arg(long)]
    pub all: bool,

    /// Include SPF TXT records (records starting with 'v=spf1'). By default, SPF records are ignored
    #[arg(long)]
    pub include_spf: bool,

    /// Simple mode: treat bare tokens as keys and list each domain's distinct key prefixes
    #[arg(long)]
    pub simple: bool,

    /// DNS query timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Filtering switches for the extractor.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            include_all_records: self.all,
            include_spf: self.include_spf,
            simple_mode: self.simple,
        }
    }

    /// False with `--no-color` or a non-empty `NO_COLOR` environment variable.
    pub fn color_enabled(&self) -> bool {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        !self.no_color && !no_color_env
    }

    /// Rendering settings.
    ///
    /// An unknown `--format` falls back to pretty with a warning.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: OutputFormat::from_arg(&self.format),
            color: self.color_enabled(),
        }
    }
}
