//! Tests for command-line parsing and the settings derived from it.

use clap::Parser;
use dnxty::config::{LogFormat, LogLevel, DNS_TIMEOUT_SECS};
use dnxty::{Cli, FilterConfig, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["dnxty", "example.com"]).unwrap();
    assert_eq!(cli.domains, vec!["example.com"]);
    assert_eq!(cli.file, None);
    assert_eq!(cli.format, "pretty");
    assert_eq!(cli.timeout, DNS_TIMEOUT_SECS);
    assert!(matches!(cli.log_level, LogLevel::Warn));
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert_eq!(cli.filter_config(), FilterConfig::default());
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "dnxty",
        "--file",
        "domains.txt",
        "--format",
        "YAML",
        "--no-color",
        "--all",
        "--include-spf",
        "--simple",
        "--timeout",
        "2",
        "a.example",
        "b.example",
    ])
    .unwrap();

    assert_eq!(cli.file, Some(PathBuf::from("domains.txt")));
    assert_eq!(cli.domains, vec!["a.example", "b.example"]);
    assert_eq!(cli.timeout, 2);
    assert_eq!(
        cli.filter_config(),
        FilterConfig {
            include_all_records: true,
            include_spf: true,
            simple_mode: true,
        }
    );

    let options = cli.render_options();
    assert_eq!(options.format, OutputFormat::Yaml);
    assert!(!options.color);
}

#[test]
fn test_unknown_format_is_accepted_and_falls_back() {
    let cli = Cli::try_parse_from(["dnxty", "--format", "xml", "example.com"]).unwrap();
    assert_eq!(cli.render_options().format, OutputFormat::Pretty);
}

#[test]
fn test_no_domains_still_parses() {
    // The missing-domains check happens after the file is read
    let cli = Cli::try_parse_from(["dnxty"]).unwrap();
    assert!(cli.domains.is_empty());
}

#[test]
fn test_log_options() {
    let cli = Cli::try_parse_from([
        "dnxty",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "example.com",
    ])
    .unwrap();
    assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Debug);
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_timeout_is_rejected() {
    assert!(Cli::try_parse_from(["dnxty", "--timeout", "soon", "example.com"]).is_err());
}
