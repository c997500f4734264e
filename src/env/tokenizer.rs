//! Line-oriented tokenizer for `.env` files
//!
//! Every non-blank, non-comment line must be a `KEY=VALUE` assignment. Values
//! never span lines.

use crate::error::{EnvParseError, EnvParseErrorKind};

/// One `KEY=VALUE` assignment, before quote stripping and type inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub raw_value: String,
    /// 1-based line of the assignment.
    pub line: usize,
}

/// Split env file content into assignments, in file order.
pub fn tokenize(content: &str) -> Result<Vec<EnvEntry>, EnvParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut entries = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if is_skippable(line) {
            continue;
        }
        entries.push(parse_assignment(line, idx + 1)?);
    }

    Ok(entries)
}

/// The key is the run of `[A-Za-z0-9_]` directly before the first `=`; the
/// value is everything after it.
fn parse_assignment(line: &str, line_no: usize) -> Result<EnvEntry, EnvParseError> {
    let Some((before, value)) = line.split_once('=') else {
        return Err(EnvParseError {
            line: line_no,
            kind: EnvParseErrorKind::MissingSeparator(line.to_string()),
        });
    };

    let key_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_key_char(*c))
        .last()
        .map(|(i, _)| i);
    let Some(start) = key_start else {
        return Err(EnvParseError {
            line: line_no,
            kind: EnvParseErrorKind::InvalidKey(before.to_string()),
        });
    };

    Ok(EnvEntry { key: before[start..].to_string(), raw_value: value.to_string(), line: line_no })
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
