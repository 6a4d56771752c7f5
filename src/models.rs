use serde::Serialize;

/// A TXT record kept by the extractor, with the key/value token found in it.
///
/// `key` and `value` are empty when the record was kept only because of `--all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxtRecord {
    pub domain: String,
    #[serde(rename = "txt")]
    pub raw: String,
    pub key: String,
    pub value: String,
}

/// A deduplicated key prefix for one domain (`google-site-verification` → `google`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SimplifiedRecord {
    pub domain: String,
    #[serde(rename = "key")]
    pub simplified_key: String,
}

/// Filtering switches for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep records that carry no key/value token (`--all`).
    pub include_all_records: bool,
    /// Keep `v=spf1` records (`--include-spf`).
    pub include_spf: bool,
    /// Infer bare-token keys and emit simplified output (`--simple`).
    pub simple_mode: bool,
}
