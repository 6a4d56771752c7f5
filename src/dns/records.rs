//! TXT record queries.

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Queries TXT (text) records for a domain.
///
/// Each TXT record may consist of several character-strings; they are joined
/// without a separator into one string per record.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings. A name that exists but has no TXT records
/// yields an empty vector.
///
/// # Errors
///
/// Returns `LookupError::NxDomain` if the domain does not exist,
/// `LookupError::Timeout` if the resolver timed out, and
/// `LookupError::Resolve` for any other failure.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            log::debug!("Found {} TXT records for {domain}", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => classify_resolve_error(domain, e.kind()),
    }
}

/// Maps a failed resolver query onto the lookup outcome for `domain`.
///
/// A name that exists without TXT records (NODATA) is an empty success,
/// logged at warn so the domain still gets a line of feedback.
fn classify_resolve_error(
    domain: &str,
    kind: &ResolveErrorKind,
) -> Result<Vec<String>, LookupError> {
    match kind {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            Err(LookupError::NxDomain {
                domain: domain.to_string(),
            })
        }
        ResolveErrorKind::NoRecordsFound { .. } => {
            log::warn!("No TXT records found for {domain}");
            Ok(Vec::new())
        }
        ResolveErrorKind::Timeout => Err(LookupError::Timeout {
            domain: domain.to_string(),
        }),
        _ => Err(LookupError::Resolve {
            domain: domain.to_string(),
            message: kind.to_string(),
        }),
    }
}
