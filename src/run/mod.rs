//! Extraction pipeline driver.
//!
//! Queries each domain in input order, extracts its records, and absorbs
//! per-domain lookup failures so one bad domain never stops the batch.

mod statistics;

use crate::dns::TxtLookup;
use crate::error_handling::{InfoType, LookupError, ProcessingStats};
use crate::extract::{extract_record, Extraction};
use crate::models::{FilterConfig, TxtRecord};
use crate::output::Results;
use crate::simplify::simplify;

pub use statistics::print_statistics;

/// A domain whose TXT lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFailure {
    pub domain: String,
    pub error: LookupError,
}

/// Outcome of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Kept records, grouped by domain in input order.
    pub records: Vec<TxtRecord>,
    /// Domains whose lookup failed, in input order.
    pub failures: Vec<DomainFailure>,
    /// Number of lookups attempted (duplicates included).
    pub domains_queried: usize,
}

impl ExtractionReport {
    /// Turns the kept records into the rows to render.
    ///
    /// Simple mode collapses them into deduplicated key prefixes.
    pub fn into_results(self, simple_mode: bool) -> Results {
        if simple_mode {
            Results::Simplified(simplify(&self.records))
        } else {
            Results::Full(self.records)
        }
    }
}

/// Looks up and extracts the TXT records of every domain in `domains`.
///
/// Domains are processed one at a time, in order. A failed lookup is logged,
/// counted in `stats`, recorded in the report, and the run moves on.
pub async fn run_extraction<L: TxtLookup>(
    domains: &[String],
    lookup: &L,
    config: &FilterConfig,
    stats: &ProcessingStats,
) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for domain in domains {
        report.domains_queried += 1;

        let raw_records = match lookup.lookup_txt(domain).await {
            Ok(raw_records) => raw_records,
            Err(error) => {
                log::error!("{error}");
                stats.increment_error(error.error_type());
                report.failures.push(DomainFailure {
                    domain: domain.clone(),
                    error,
                });
                continue;
            }
        };
        log::debug!("{domain}: {} TXT records", raw_records.len());

        for raw in &raw_records {
            match extract_record(domain, raw, config) {
                Extraction::Kept {
                    record,
                    inferred_key,
                } => {
                    if inferred_key {
                        stats.increment_info(InfoType::FallbackKeyInferred);
                    }
                    report.records.push(record);
                }
                Extraction::SpfFiltered => {
                    log::trace!("{domain}: skipping SPF record");
                    stats.increment_info(InfoType::SpfRecordFiltered);
                }
                Extraction::NoKey => {
                    log::trace!("{domain}: no key/value in {raw:?}");
                    stats.increment_info(InfoType::RecordWithoutKey);
                }
            }
        }
    }

    log::info!(
        "Queried {} domains: {} records kept, {} lookups failed",
        report.domains_queried,
        report.records.len(),
        report.failures.len()
    );
    report
}

#[cfg(test)]
mod tests;
