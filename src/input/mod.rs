//! Domain list gathering.
//!
//! Domains come from an optional file (or stdin when the path is `-`) followed
//! by the positional arguments. File lines are trimmed; blank lines and lines
//! starting with `#` are skipped. Duplicates are kept.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::STDIN_PATH;
use crate::error_handling::InputError;

/// Reads one domain per line from `reader`.
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read (including
/// invalid UTF-8).
pub async fn parse_domain_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut domains = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        domains.push(trimmed.to_string());
    }
    Ok(domains)
}

async fn read_domain_file(path: &Path) -> Result<Vec<String>, InputError> {
    let read_error = |source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        log::info!("Reading domains from stdin");
        return parse_domain_lines(BufReader::new(tokio::io::stdin()))
            .await
            .map_err(read_error);
    }

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| InputError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
    let domains = parse_domain_lines(BufReader::new(file))
        .await
        .map_err(read_error)?;
    log::info!("Read {} domains from {}", domains.len(), path.display());
    Ok(domains)
}

/// Builds the ordered domain list: file domains first, then `positional`.
///
/// # Errors
///
/// - [`InputError::FileOpen`] / [`InputError::FileRead`] if the file cannot be read
/// - [`InputError::NoDomains`] if the combined list is empty
pub async fn gather_domains(
    file: Option<&Path>,
    positional: &[String],
) -> Result<Vec<String>, InputError> {
    let mut domains = match file {
        Some(path) => read_domain_file(path).await?,
        None => Vec::new(),
    };
    domains.extend(positional.iter().cloned());

    if domains.is_empty() {
        return Err(InputError::NoDomains);
    }
    Ok(domains)
}
