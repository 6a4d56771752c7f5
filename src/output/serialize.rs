//! Plain (unstyled) serialization of result rows.

use csv::{Terminator, WriterBuilder};

use super::{render_table, OutputFormat, Row};
use crate::error_handling::RenderError;

/// Serializes `rows` in `format` without any styling.
///
/// JSON is indented with two spaces and an empty result is `[]`. CSV rows end
/// in `\n` and start with a header row.
pub fn serialize<R: Row>(rows: &[R], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Pretty => Ok(render_table(rows, false)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(rows)?),
        OutputFormat::Csv => to_csv(rows),
    }
}

fn to_csv<R: Row>(rows: &[R]) -> Result<String, RenderError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Io(e.into_error()))?;
    // Every field came from a String, so this never replaces anything.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
