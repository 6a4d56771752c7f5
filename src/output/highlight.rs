//! Terminal syntax highlighting for serialized output.
//!
//! Each highlighter is a small lexer over already-serialized text. It never
//! changes the text itself, only wraps tokens in ANSI styles, so stripping the
//! escapes gives back the input. Input a lexer cannot make sense of is an
//! error, and the caller prints the plain text instead.

use colored::{ColoredString, Colorize};

use super::OutputFormat;
use crate::error_handling::RenderError;

/// Highlights `text`, which must already be serialized as `format`.
pub fn highlight(text: &str, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Json => highlight_json(text),
        OutputFormat::Yaml => Ok(highlight_yaml(text)),
        OutputFormat::Csv => highlight_csv(text),
        // Tables style their own headers
        OutputFormat::Pretty => Ok(text.to_string()),
    }
}

fn highlight_error(format: &'static str, message: impl Into<String>) -> RenderError {
    RenderError::Highlight {
        format,
        message: message.into(),
    }
}

/// Returns the index just past the closing quote of the JSON string opening at `start`.
fn json_string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos + 1),
            _ => pos += 1,
        }
    }
    None
}

/// Highlights JSON: object keys, strings, numbers and literals.
pub fn highlight_json(text: &str) -> Result<String, RenderError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        match b {
            b'"' => {
                let end = json_string_end(bytes, pos)
                    .ok_or_else(|| highlight_error("json", "unterminated string"))?;
                let token = &text[pos..end];
                let is_key = text[end..].trim_start().starts_with(':');
                let styled: ColoredString = if is_key {
                    token.blue().bold()
                } else {
                    token.green()
                };
                out.push_str(&styled.to_string());
                pos = end;
            }
            b'-' | b'0'..=b'9' => {
                let end = bytes[pos..]
                    .iter()
                    .position(|&c| {
                        !(c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.' | b'e' | b'E'))
                    })
                    .map_or(bytes.len(), |offset| pos + offset);
                out.push_str(&text[pos..end].yellow().to_string());
                pos = end;
            }
            b't' | b'f' | b'n' => {
                let end = bytes[pos..]
                    .iter()
                    .position(|c| !c.is_ascii_alphabetic())
                    .map_or(bytes.len(), |offset| pos + offset);
                let literal = &text[pos..end];
                if !matches!(literal, "true" | "false" | "null") {
                    return Err(highlight_error("json", format!("unexpected literal '{literal}'")));
                }
                out.push_str(&literal.magenta().to_string());
                pos = end;
            }
            b'{' | b'}' | b'[' | b']' | b',' | b':' | b' ' | b'\t' | b'\n' | b'\r' => {
                out.push(char::from(b));
                pos += 1;
            }
            _ => {
                return Err(highlight_error(
                    "json",
                    format!("unexpected character at byte {pos}"),
                ))
            }
        }
    }

    Ok(out)
}

fn is_plain_yaml_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-'))
}

/// Highlights YAML line by line: list markers, mapping keys and scalar values.
pub fn highlight_yaml(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let body = line.trim_start();
        out.push_str(&line[..line.len() - body.len()]);

        let body = match body.strip_prefix("- ") {
            Some(rest) => {
                out.push_str(&"-".yellow().to_string());
                out.push(' ');
                rest
            }
            None if body == "-" => {
                out.push_str(&"-".yellow().to_string());
                continue;
            }
            None => body,
        };

        let (key, value) = match body.split_once(": ") {
            Some((key, value)) => (key, Some(value)),
            None => match body.strip_suffix(':') {
                Some(key) => (key, None),
                None => ("", Some(body)),
            },
        };

        if is_plain_yaml_key(key) {
            out.push_str(&key.blue().bold().to_string());
            out.push(':');
            if let Some(value) = value {
                out.push(' ');
                out.push_str(&value.green().to_string());
            }
        } else {
            out.push_str(&body.green().to_string());
        }
    }

    out
}

fn push_csv_field(out: &mut String, field: &str, row: usize, column: usize) {
    if field.is_empty() {
        return;
    }
    let styled = match (row, column % 4) {
        (0, _) => field.bright_blue().bold(),
        (_, 0) => field.cyan(),
        (_, 1) => field.green(),
        (_, 2) => field.yellow(),
        _ => field.magenta(),
    };
    out.push_str(&styled.to_string());
}

/// Highlights CSV: a bold header row and one color per column.
pub fn highlight_csv(text: &str) -> Result<String, RenderError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let (mut row, mut column, mut field_start) = (0, 0, 0);
    let mut in_quotes = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if in_quotes {
            if b == b'"' {
                if bytes.get(pos + 1) == Some(&b'"') {
                    pos += 2;
                    continue;
                }
                in_quotes = false;
            }
            pos += 1;
            continue;
        }

        match b {
            b'"' => in_quotes = true,
            b',' => {
                push_csv_field(&mut out, &text[field_start..pos], row, column);
                out.push(',');
                column += 1;
                field_start = pos + 1;
            }
            b'\n' => {
                let field = &text[field_start..pos];
                let (field, cr) = match field.strip_suffix('\r') {
                    Some(field) => (field, "\r"),
                    None => (field, ""),
                };
                push_csv_field(&mut out, field, row, column);
                out.push_str(cr);
                out.push('\n');
                row += 1;
                column = 0;
                field_start = pos + 1;
            }
            _ => {}
        }
        pos += 1;
    }

    if in_quotes {
        return Err(highlight_error("csv", "unterminated quoted field"));
    }
    push_csv_field(&mut out, &text[field_start..], row, column);

    Ok(out)
}
