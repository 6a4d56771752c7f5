//! DNS TXT lookups.
//!
//! The pipeline only needs one capability from DNS: "give me the TXT strings
//! of this domain, or tell me why you can't". That capability is the
//! [`TxtLookup`] trait. It is implemented for the `hickory-resolver` Tokio
//! resolver, and by [`StaticTxtLookup`], an in-memory test double.

mod records;

use std::collections::HashMap;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

// Re-export public API
pub use records::lookup_txt_records;

/// Something that can fetch the raw TXT strings of a domain.
#[allow(async_fn_in_trait)]
pub trait TxtLookup {
    /// Returns the TXT strings published for `domain`.
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

impl TxtLookup for TokioAsyncResolver {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(domain, self).await
    }
}

/// A fixed domain → answer table standing in for the resolver in tests.
///
/// Lets the pipeline run without network access. Domains missing from the
/// table answer with `LookupError::NxDomain`.
#[derive(Debug, Clone, Default)]
pub struct StaticTxtLookup {
    answers: HashMap<String, Result<Vec<String>, LookupError>>,
}

impl StaticTxtLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `records` for `domain`.
    pub fn with_records<I, S>(mut self, domain: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.insert(
            domain.to_string(),
            Ok(records.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Makes lookups of `domain` fail with `error`.
    pub fn with_error(mut self, domain: &str, error: LookupError) -> Self {
        self.answers.insert(domain.to_string(), Err(error));
        self
    }
}

impl TxtLookup for StaticTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.answers
            .get(domain)
            .cloned()
            .unwrap_or_else(|| {
                Err(LookupError::NxDomain {
                    domain: domain.to_string(),
                })
            })
    }
}
