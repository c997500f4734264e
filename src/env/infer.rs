//! Value typing for env file entries

use serde_json::Value;

/// Remove one layer of matching single or double quotes.
pub fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Type a raw value: digits become an integer, `true`/`false` (any case) a
/// boolean, anything else stays a string.
pub fn infer_value(raw: &str) -> Value {
    let value = strip_quotes(raw);

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        // Too large for u64: keep the digits as text.
        if let Ok(n) = value.parse::<u64>() {
            return Value::Number(n.into());
        }
    }

    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::String(value.to_string())
}
