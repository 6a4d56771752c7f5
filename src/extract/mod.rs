//! TXT record extraction.
//!
//! Turns the raw TXT strings of one domain into [`TxtRecord`]s. Each raw
//! string goes through the same steps:
//! 1. SPF records (`v=spf1...`) are dropped unless SPF is included
//! 2. The first `key=value` token is located
//! 3. In simple mode, a bare token (no space, no `=`) becomes the key
//! 4. The record is kept or dropped depending on the key and `--all`

mod matcher;

pub use matcher::{match_key_value, KeyValue};

use crate::models::{FilterConfig, TxtRecord};

const SPF_PREFIX: &str = "v=spf1";

/// What happened to a single raw TXT string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The record survived filtering.
    Kept {
        record: TxtRecord,
        /// The key is the whole raw text (simple-mode fallback).
        inferred_key: bool,
    },
    /// An SPF record dropped because SPF records are excluded.
    SpfFiltered,
    /// No key could be extracted and the record was not wanted without one.
    NoKey,
}

impl Extraction {
    /// Returns the kept record, if any.
    pub fn into_record(self) -> Option<TxtRecord> {
        match self {
            Extraction::Kept { record, .. } => Some(record),
            Extraction::SpfFiltered | Extraction::NoKey => None,
        }
    }
}

/// Returns true if `raw` starts with `v=spf1`, ignoring ASCII case.
///
/// The text is not trimmed first.
pub fn is_spf_record(raw: &str) -> bool {
    raw.as_bytes()
        .get(..SPF_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SPF_PREFIX.as_bytes()))
}

/// A bare verification token: non-empty, no space and no `=`.
fn is_bare_token(raw: &str) -> bool {
    !raw.is_empty() && !raw.contains(' ') && !raw.contains('=')
}

/// Runs the extraction steps on one raw TXT string.
pub fn extract_record(domain: &str, raw: &str, config: &FilterConfig) -> Extraction {
    if !config.include_spf && is_spf_record(raw) {
        return Extraction::SpfFiltered;
    }

    let (key, value, inferred_key) = match match_key_value(raw) {
        Some(KeyValue { key, value }) => (key, value, false),
        None if config.simple_mode && is_bare_token(raw) => (raw, "", true),
        None => ("", "", false),
    };

    // The matcher never yields a value without a key, so "key non-empty" is
    // the same test as "key or value non-empty".
    let keep = if config.simple_mode {
        !key.is_empty()
    } else {
        config.include_all_records || !key.is_empty()
    };

    if !keep {
        return Extraction::NoKey;
    }

    Extraction::Kept {
        record: TxtRecord {
            domain: domain.to_string(),
            raw: raw.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        },
        inferred_key,
    }
}

/// Extracts the structured records for one domain's raw TXT strings.
///
/// Records are returned in the order the raw strings were given.
pub fn extract<S: AsRef<str>>(
    domain: &str,
    raw_records: &[S],
    config: &FilterConfig,
) -> Vec<TxtRecord> {
    raw_records
        .iter()
        .filter_map(|raw| extract_record(domain, raw.as_ref(), config).into_record())
        .collect()
}
