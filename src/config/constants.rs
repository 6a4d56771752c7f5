//! Configuration constants.
//!
//! Defaults for DNS behaviour and command-line help text.

// Network operation timeouts
/// DNS query timeout in seconds (overridable with `--timeout`)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Resolver attempts per query before giving up on a domain
pub const DNS_ATTEMPTS: usize = 2;

/// Path argument that makes `--file` read from stdin
pub const STDIN_PATH: &str = "-";

/// Usage examples printed after `--help`.
pub const HELP_EXAMPLES: &str = "\
Examples:
  dnxty google.com facebook.com
  dnxty --file domains.txt --format json
  dnxty --all google.com
  dnxty --include-spf google.com
  dnxty --simple --format csv google.com";
