//! Output formatting for extraction results.
//!
//! Results are rendered as one of:
//! - `pretty`: an ASCII table with (optionally colored) headers
//! - `json`: a 2-space indented array
//! - `yaml`: a sequence of maps
//! - `csv`: a header row followed by one row per record
//!
//! When color is enabled the serialized formats are syntax highlighted. Any
//! serialization or highlighting failure falls back to a plain rendering of
//! the same data rather than aborting.

mod highlight;
mod serialize;
mod table;
mod writer;

use std::io::{self, Write};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::models::{SimplifiedRecord, TxtRecord};

pub use highlight::{highlight, highlight_csv, highlight_json, highlight_yaml};
pub use serialize::serialize;
pub use table::render_table;
pub use writer::IgnoreBrokenPipe;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    #[strum(to_string = "pretty", serialize = "table")]
    Pretty,
    /// Indented JSON
    #[strum(to_string = "json")]
    Json,
    /// YAML
    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
    /// Comma-separated values
    #[strum(to_string = "csv")]
    Csv,
}

impl OutputFormat {
    /// Parses a `--format` value, falling back to `Pretty` with a warning.
    pub fn from_arg(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            let valid: Vec<String> = Self::iter().map(|f| f.to_string()).collect();
            log::warn!(
                "Unknown output format '{value}'. Defaulting to pretty (valid formats: {}).",
                valid.join(", ")
            );
            Self::Pretty
        })
    }
}

/// How results are rendered.
///
/// Color is carried here explicitly instead of living in process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            color: true,
        }
    }
}

/// A record type that can be laid out as a table or CSV row.
pub trait Row: serde::Serialize {
    /// Column headers, shared by the table and CSV renderers.
    const HEADERS: &'static [&'static str];

    /// Cell values in header order.
    fn cells(&self) -> Vec<&str>;
}

impl Row for TxtRecord {
    const HEADERS: &'static [&'static str] = &["Domain", "TXT Record", "Key", "Value"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.domain.as_str(),
            self.raw.as_str(),
            self.key.as_str(),
            self.value.as_str(),
        ]
    }
}

impl Row for SimplifiedRecord {
    const HEADERS: &'static [&'static str] = &["Domain", "Key"];

    fn cells(&self) -> Vec<&str> {
        vec![self.domain.as_str(), self.simplified_key.as_str()]
    }
}

/// The terminal output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    /// Every kept record (default mode).
    Full(Vec<TxtRecord>),
    /// Deduplicated key prefixes (`--simple`).
    Simplified(Vec<SimplifiedRecord>),
}

impl Results {
    /// Number of rows that will be rendered.
    pub fn len(&self) -> usize {
        match self {
            Results::Full(records) => records.len(),
            Results::Simplified(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders `results` into `out`.
///
/// # Errors
///
/// Only I/O errors on `out` are returned; formatting problems are logged and
/// answered with a plain rendering.
pub fn render<W: Write>(out: &mut W, results: &Results, options: &RenderOptions) -> io::Result<()> {
    match results {
        Results::Full(records) => render_rows(out, records, options),
        Results::Simplified(records) => render_rows(out, records, options),
    }
}

/// Renders `results` to stdout, ignoring a closed downstream pipe.
pub fn print_results(results: &Results, options: &RenderOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = IgnoreBrokenPipe::new(stdout.lock());
    render(&mut out, results, options)?;
    out.flush()
}

fn render_rows<R: Row, W: Write>(out: &mut W, rows: &[R], options: &RenderOptions) -> io::Result<()> {
    if options.format == OutputFormat::Pretty {
        return writeln!(out, "{}", render_table(rows, options.color));
    }

    let text = match serialize(rows, options.format) {
        Ok(text) => text,
        Err(e) => {
            log::error!("{e}. Falling back to plain table output.");
            return writeln!(out, "{}", render_table(rows, false));
        }
    };
    write_serialized(out, text.trim_end(), options)
}

/// Writes already-serialized text, highlighted when color is on.
fn write_serialized<W: Write>(out: &mut W, text: &str, options: &RenderOptions) -> io::Result<()> {
    if options.color {
        match highlight(text, options.format) {
            Ok(styled) => return writeln!(out, "{styled}"),
            Err(e) => log::debug!("{e}. Printing without highlighting."),
        }
    }
    writeln!(out, "{text}")
}

#[cfg(test)]
mod tests;
