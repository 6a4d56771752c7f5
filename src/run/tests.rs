//! Pipeline tests against an in-memory lookup.

use super::*;
use crate::dns::StaticTxtLookup;
use crate::models::SimplifiedRecord;

const SPF: &str = "v=spf1 include:_spf.example.com ~all";
const GOOGLE: &str = "google-site-verification=XYZ";

fn domains(names: &[&str]) -> Vec<String> {
    names.iter().map(|d| d.to_string()).collect()
}

fn example_lookup() -> StaticTxtLookup {
    StaticTxtLookup::new().with_records("example.com", [SPF, GOOGLE])
}

#[tokio::test]
async fn test_default_flags_end_to_end() {
    let stats = ProcessingStats::new();
    let report = run_extraction(
        &domains(&["example.com"]),
        &example_lookup(),
        &FilterConfig::default(),
        &stats,
    )
    .await;

    assert_eq!(
        report.records,
        vec![TxtRecord {
            domain: "example.com".to_string(),
            raw: GOOGLE.to_string(),
            key: "google-site-verification".to_string(),
            value: "XYZ".to_string(),
        }]
    );
    assert!(report.failures.is_empty());
    assert_eq!(report.domains_queried, 1);
    assert_eq!(stats.get_info_count(InfoType::SpfRecordFiltered), 1);
}

#[tokio::test]
async fn test_simple_mode_end_to_end() {
    let config = FilterConfig {
        simple_mode: true,
        ..FilterConfig::default()
    };
    let report = run_extraction(
        &domains(&["example.com"]),
        &example_lookup(),
        &config,
        &ProcessingStats::new(),
    )
    .await;

    assert_eq!(
        report.into_results(true),
        Results::Simplified(vec![SimplifiedRecord {
            domain: "example.com".to_string(),
            simplified_key: "google".to_string(),
        }])
    );
}

#[tokio::test]
async fn test_failed_domain_does_not_stop_batch() {
    let lookup = StaticTxtLookup::new()
        .with_records("a.example", ["MS=ms111"])
        .with_error(
            "b.example",
            LookupError::Timeout {
                domain: "b.example".to_string(),
            },
        )
        .with_records("c.example", ["apple-domain-verification=abc"]);
    let stats = ProcessingStats::new();

    let report = run_extraction(
        &domains(&["a.example", "b.example", "missing.example", "c.example"]),
        &lookup,
        &FilterConfig::default(),
        &stats,
    )
    .await;

    let kept: Vec<&str> = report.records.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(kept, vec!["a.example", "c.example"]);
    let failed: Vec<&str> = report.failures.iter().map(|f| f.domain.as_str()).collect();
    assert_eq!(failed, vec!["b.example", "missing.example"]);
    assert_eq!(report.domains_queried, 4);
    assert_eq!(stats.get_error_count(crate::error_handling::ErrorType::DnsTimeout), 1);
    assert_eq!(stats.get_error_count(crate::error_handling::ErrorType::DnsNxDomain), 1);
    assert_eq!(stats.total_errors(), 2);
}

#[tokio::test]
async fn test_duplicate_domains_are_queried_twice() {
    let report = run_extraction(
        &domains(&["example.com", "example.com"]),
        &example_lookup(),
        &FilterConfig::default(),
        &ProcessingStats::new(),
    )
    .await;
    assert_eq!(report.domains_queried, 2);
    assert_eq!(report.records.len(), 2);

    // Simplified output still lists the pair once
    assert_eq!(report.into_results(true).len(), 1);
}

#[tokio::test]
async fn test_all_flag_keeps_keyless_records() {
    let lookup = StaticTxtLookup::new().with_records("example.com", ["hello world", GOOGLE]);
    let config = FilterConfig {
        include_all_records: true,
        ..FilterConfig::default()
    };
    let stats = ProcessingStats::new();
    let report = run_extraction(&domains(&["example.com"]), &lookup, &config, &stats).await;

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].raw, "hello world");
    assert!(report.records[0].key.is_empty());
    assert_eq!(stats.get_info_count(InfoType::RecordWithoutKey), 0);
}

#[tokio::test]
async fn test_bare_token_counts_as_inferred() {
    let lookup = StaticTxtLookup::new().with_records("example.com", ["justsingleword"]);
    let config = FilterConfig {
        simple_mode: true,
        ..FilterConfig::default()
    };
    let stats = ProcessingStats::new();
    let report = run_extraction(&domains(&["example.com"]), &lookup, &config, &stats).await;

    assert_eq!(report.records[0].key, "justsingleword");
    assert_eq!(stats.get_info_count(InfoType::FallbackKeyInferred), 1);
    print_statistics(&stats);
}

#[tokio::test]
async fn test_empty_answer_is_not_a_failure() {
    let lookup = StaticTxtLookup::new().with_records("example.com", Vec::<String>::new());
    let report = run_extraction(
        &domains(&["example.com"]),
        &lookup,
        &FilterConfig::default(),
        &ProcessingStats::new(),
    )
    .await;
    assert!(report.records.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(report.into_results(false), Results::Full(Vec::new()));
}
