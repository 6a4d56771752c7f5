//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each failure class
//! - Processing statistics tracking (lookup errors, extraction info metrics)
//!
//! Failures are categorized into:
//! - **Fatal**: input gathering problems that abort the run ([`InputError`])
//! - **Per-domain**: TXT lookup failures that skip one domain ([`LookupError`])
//! - **Per-output**: rendering failures that fall back to plain output ([`RenderError`])

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, InputError, LookupError, RenderError};
