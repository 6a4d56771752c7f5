//! Rendering tests.

use super::*;

fn full() -> Results {
    Results::Full(vec![TxtRecord {
        domain: "example.com".to_string(),
        raw: "google-site-verification=XYZ".to_string(),
        key: "google-site-verification".to_string(),
        value: "XYZ".to_string(),
    }])
}

fn simplified() -> Results {
    Results::Simplified(vec![SimplifiedRecord {
        domain: "example.com".to_string(),
        simplified_key: "google".to_string(),
    }])
}

fn plain(format: OutputFormat) -> RenderOptions {
    RenderOptions {
        format,
        color: false,
    }
}

fn rendered(results: &Results, options: RenderOptions) -> String {
    let mut out = Vec::new();
    render(&mut out, results, &options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("Yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_output_format_display() {
    assert_eq!(OutputFormat::Pretty.to_string(), "pretty");
    assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
}

#[test]
fn test_from_arg_falls_back_to_pretty() {
    assert_eq!(OutputFormat::from_arg("table"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from_arg("CSV"), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_arg("xml"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from_arg(""), OutputFormat::Pretty);
}

#[test]
fn test_render_json_plain() {
    let out = rendered(&full(), plain(OutputFormat::Json));
    assert!(out.starts_with("[\n  {\n    \"domain\": \"example.com\""));
    assert!(out.ends_with("]\n"));
}

#[test]
fn test_render_simplified_json_uses_key_field() {
    let out = rendered(&simplified(), plain(OutputFormat::Json));
    assert_eq!(
        out,
        "[\n  {\n    \"domain\": \"example.com\",\n    \"key\": \"google\"\n  }\n]\n"
    );
}

#[test]
fn test_render_csv_plain() {
    let out = rendered(&simplified(), plain(OutputFormat::Csv));
    assert_eq!(out, "Domain,Key\nexample.com,google\n");
}

#[test]
fn test_render_yaml_plain() {
    let out = rendered(&full(), plain(OutputFormat::Yaml));
    assert!(out.contains("- domain: example.com\n"));
    assert!(out.contains("  txt: google-site-verification=XYZ\n"));
}

#[test]
fn test_render_pretty_plain() {
    let out = rendered(&full(), plain(OutputFormat::Pretty));
    assert!(out.contains("TXT Record"));
    assert!(out.contains("google-site-verification=XYZ"));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_render_with_color_keeps_data() {
    // Whether ANSI codes appear depends on the terminal; the data must be there either way.
    for format in OutputFormat::iter() {
        let out = rendered(
            &full(),
            RenderOptions {
                format,
                color: true,
            },
        );
        assert!(out.contains("example.com"), "{format}: {out}");
        assert!(out.contains("XYZ"), "{format}: {out}");
    }
}

#[test]
fn test_results_len() {
    assert_eq!(full().len(), 1);
    assert!(!simplified().is_empty());
    assert!(Results::Full(Vec::new()).is_empty());
}

/// A row whose serialization always fails.
struct Unserializable {
    domain: String,
    key: String,
}

impl serde::Serialize for Unserializable {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("unsupported record"))
    }
}

impl Row for Unserializable {
    const HEADERS: &'static [&'static str] = &["Domain", "Key"];

    fn cells(&self) -> Vec<&str> {
        vec![self.domain.as_str(), self.key.as_str()]
    }
}

fn unserializable() -> Vec<Unserializable> {
    vec![Unserializable {
        domain: "x.example".to_string(),
        key: "k".to_string(),
    }]
}

#[test]
fn test_serialization_failure_falls_back_to_plain_table() {
    let rows = unserializable();
    let table = format!("{}\n", render_table(&rows, false));

    for format in [OutputFormat::Json, OutputFormat::Yaml] {
        for color in [false, true] {
            let mut out = Vec::new();
            render_rows(&mut out, &rows, &RenderOptions { format, color }).unwrap();
            let out = String::from_utf8(out).unwrap();
            assert_eq!(out, table, "{format} color={color}");
            assert!(out.contains("x.example"));
            assert!(!out.contains('\u{1b}'), "fallback table must be unstyled");
        }
    }
}

#[test]
fn test_highlight_failure_prints_plain_text() {
    let cases = [
        (OutputFormat::Json, "[@]"),
        (OutputFormat::Csv, "Domain,Key\nx.example,\"open"),
    ];
    for (format, text) in cases {
        let mut out = Vec::new();
        write_serialized(&mut out, text, &RenderOptions { format, color: true }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{text}\n"));
    }
}
