//! Error type definitions.
//!
//! This module defines the error and info types used throughout the application:
//! fatal input errors, per-domain lookup errors, per-output render errors and the
//! counters tracked while processing a batch.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Fatal errors raised while gathering the domains to query.
///
/// Any of these aborts the run with exit code 1.
#[derive(Error, Debug)]
pub enum InputError {
    /// The domains file could not be opened.
    #[error("Error opening file {}: {source}", .path.display())]
    FileOpen {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The domains file was opened but reading it failed part way.
    #[error("Error reading file {}: {source}", .path.display())]
    FileRead {
        /// Path given on the command line (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Neither the file nor the positional arguments supplied a domain.
    #[error("No domains provided. Please supply domains as arguments or via the --file flag.")]
    NoDomains,
}

/// A TXT lookup failure for a single domain.
///
/// These are recoverable: the domain is skipped and the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The domain does not exist (NXDOMAIN).
    #[error("no such domain: {domain}")]
    NxDomain {
        /// Domain that was queried
        domain: String,
    },

    /// The resolver gave up waiting for an answer.
    #[error("lookup timed out for {domain}")]
    Timeout {
        /// Domain that was queried
        domain: String,
    },

    /// Any other resolver failure (SERVFAIL, refused, network error, ...).
    #[error("lookup failed for {domain}: {message}")]
    Resolve {
        /// Domain that was queried
        domain: String,
        /// Resolver error message
        message: String,
    },
}

impl LookupError {
    /// Maps the error onto its statistics bucket.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::NxDomain { .. } => ErrorType::DnsNxDomain,
            LookupError::Timeout { .. } => ErrorType::DnsTimeout,
            LookupError::Resolve { .. } => ErrorType::DnsTxtLookupError,
        }
    }
}

/// Errors raised while rendering results.
///
/// Never fatal: the renderer falls back to a plain rendering of the same data.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("Error marshalling JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("Error marshalling YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV serialization failed.
    #[error("Error writing CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Serialized text could not be highlighted.
    #[error("Error highlighting {format} output: {message}")]
    Highlight {
        /// Format being highlighted
        format: &'static str,
        /// What went wrong
        message: String,
    },

    /// Writing to the output stream failed.
    #[error("Error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Types of errors counted while processing a batch of domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    DnsNxDomain,
    DnsTimeout,
    DnsTxtLookupError,
}

/// Types of informational metrics counted while extracting records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    SpfRecordFiltered,    // v=spf1 record dropped
    RecordWithoutKey,     // no key=value token and --all not set
    FallbackKeyInferred,  // bare token used as key in simple mode
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsNxDomain => "DNS NXDOMAIN",
            ErrorType::DnsTimeout => "DNS TXT lookup timeout",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SpfRecordFiltered => "SPF records filtered",
            InfoType::RecordWithoutKey => "Records without key/value dropped",
            InfoType::FallbackKeyInferred => "Bare tokens used as keys",
        }
    }
}
