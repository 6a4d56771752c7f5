//! Key simplification.
//!
//! Collapses extracted keys to their provider prefix (the part before the
//! first `-`) and deduplicates them per domain, so that
//! `google-site-verification` and `google-domain-verification` on the same
//! domain both report as `google`.

use std::collections::{BTreeSet, HashMap};

use crate::models::{SimplifiedRecord, TxtRecord};

/// Returns the part of `key` before its first `-`, or the whole key.
pub fn simplify_key(key: &str) -> &str {
    key.split_once('-').map_or(key, |(prefix, _)| prefix)
}

/// Simplified keys grouped by domain for one run.
///
/// Domains keep the order in which they were first seen; keys within a domain
/// form a set and are emitted in sorted order.
#[derive(Debug, Default)]
pub struct SimplifiedKeys {
    domains: Vec<(String, BTreeSet<String>)>,
    index: HashMap<String, usize>,
}

impl SimplifiedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` (already simplified) for `domain`.
    ///
    /// Returns false if the pair was already present.
    pub fn insert(&mut self, domain: &str, key: &str) -> bool {
        let slot = match self.index.get(domain) {
            Some(&slot) => slot,
            None => {
                self.domains.push((domain.to_string(), BTreeSet::new()));
                self.index.insert(domain.to_string(), self.domains.len() - 1);
                self.domains.len() - 1
            }
        };
        self.domains[slot].1.insert(key.to_string())
    }

    /// Adds every record with a non-empty key.
    pub fn extend_from_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a TxtRecord>,
    {
        for record in records {
            if record.key.is_empty() {
                continue;
            }
            self.insert(&record.domain, simplify_key(&record.key));
        }
    }

    /// Number of distinct `(domain, key)` pairs.
    pub fn len(&self) -> usize {
        self.domains.iter().map(|(_, keys)| keys.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the per-domain sets into records.
    pub fn into_records(self) -> Vec<SimplifiedRecord> {
        self.domains
            .into_iter()
            .flat_map(|(domain, keys)| {
                keys.into_iter().map(move |simplified_key| SimplifiedRecord {
                    domain: domain.clone(),
                    simplified_key,
                })
            })
            .collect()
    }
}

/// Simplifies and deduplicates the keys of `records`.
///
/// Records with an empty key are ignored.
pub fn simplify(records: &[TxtRecord]) -> Vec<SimplifiedRecord> {
    let mut keys = SimplifiedKeys::new();
    keys.extend_from_records(records);
    keys.into_records()
}
