//! Key/value token matching.
//!
//! Finds the first `key=value` token in a TXT string. A key is a run of ASCII
//! word characters, `.` and `-`; a value is a run of ASCII letters, digits,
//! `+`, `/` and `=`. The search is leftmost-first and greedy, so for a given
//! string it yields exactly what `([\w.\-]+)=([A-Za-z0-9+/=]+)` would capture
//! on its first match with ASCII-only `\w`.

/// A `key=value` token borrowed from the record it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}

fn is_value_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Returns the first `key=value` token in `text`, if any.
///
/// Every start position inside one run of key characters ends at the same
/// place, so only the start of each run needs checking: the first run that is
/// followed by `=` and at least one value character wins, and the key is the
/// whole run.
pub fn match_key_value(text: &str) -> Option<KeyValue<'_>> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_key_byte(bytes[pos]) {
            pos += 1;
            continue;
        }

        let key_start = pos;
        while pos < bytes.len() && is_key_byte(bytes[pos]) {
            pos += 1;
        }
        let key_end = pos;

        // `=` is not a key byte, so the run either stops on it or the run fails.
        if bytes.get(key_end) == Some(&b'=')
            && bytes.get(key_end + 1).copied().is_some_and(is_value_byte)
        {
            let value_start = key_end + 1;
            let value_end = bytes[value_start..]
                .iter()
                .position(|&b| !is_value_byte(b))
                .map_or(bytes.len(), |offset| value_start + offset);

            // All boundaries sit next to ASCII bytes, so slicing is char-aligned.
            return Some(KeyValue {
                key: &text[key_start..key_end],
                value: &text[value_start..value_end],
            });
        }
    }

    None
}
