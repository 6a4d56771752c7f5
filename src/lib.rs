//! dnxty library: DNS TXT record extraction
//!
//! This library looks up the TXT records of a list of domains and pulls the
//! first `key=value` token out of each one (verification tokens such as
//! `google-site-verification=...`). SPF records are skipped by default.
//! In simple mode, keys are collapsed to their provider prefix and
//! deduplicated per domain.
//!
//! # Example
//!
//! ```
//! use dnxty::{extract, simplify, FilterConfig};
//!
//! let raw = [
//!     "v=spf1 include:_spf.example.com ~all",
//!     "google-site-verification=XYZ",
//! ];
//! let records = extract("example.com", &raw, &FilterConfig::default());
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].key, "google-site-verification");
//!
//! let simplified = simplify(&records);
//! assert_eq!(simplified[0].simplified_key, "google");
//! ```
//!
//! # Requirements
//!
//! DNS lookups require a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling [`run_extraction`] within an async context.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod input;
mod models;
pub mod output;
pub mod run;
pub mod simplify;

// Re-export public API
pub use config::{Cli, LogFormat, LogLevel};
pub use dns::{StaticTxtLookup, TxtLookup};
pub use extract::{extract, extract_record, is_spf_record, Extraction};
pub use models::{FilterConfig, SimplifiedRecord, TxtRecord};
pub use output::{print_results, render, OutputFormat, RenderOptions, Results};
pub use run::{run_extraction, DomainFailure, ExtractionReport};
pub use simplify::{simplify, simplify_key, SimplifiedKeys};
