//! Per-format decoders producing a flat top-level mapping
//!
//! Every decoder normalizes into `serde_json::Value` so that values coming from
//! different formats compare and merge the same way.

use crate::domain::{ConfigMap, Format};
use crate::error::ConfigError;
use serde_json::{Number, Value};
use std::path::Path;

/// Decode `content` according to `format`.
///
/// `Format::Unsupported` yields an empty mapping.
pub fn decode(format: Format, content: &str, path: &Path) -> Result<ConfigMap, ConfigError> {
    match format {
        Format::Json => decode_json(content, path),
        Format::Toml => decode_toml(content, path),
        Format::Yaml => decode_yaml(content, path),
        Format::Unsupported => Ok(ConfigMap::new()),
    }
}

fn decode_json(content: &str, path: &Path) -> Result<ConfigMap, ConfigError> {
    let raw: Value = serde_json::from_str(content)
        .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;
    into_mapping(raw, path)
}

fn decode_toml(content: &str, path: &Path) -> Result<ConfigMap, ConfigError> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })?;
    Ok(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
}

fn decode_yaml(content: &str, path: &Path) -> Result<ConfigMap, ConfigError> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })?;

    // An empty document decodes to null and contributes nothing.
    if raw.is_null() {
        return Ok(ConfigMap::new());
    }
    into_mapping(from_yaml(raw), path)
}

fn into_mapping(value: Value, path: &Path) -> Result<ConfigMap, ConfigError> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(ConfigError::NotAMapping { path: path.to_path_buf(), found: kind_of(&other) }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

fn float(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
        }
    }
}

fn from_yaml(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64().map(float).unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(from_yaml).collect())
        }
        serde_yaml::Value::Mapping(mapping) => Value::Object(
            mapping.into_iter().map(|(k, v)| (yaml_key(k), from_yaml(v))).collect(),
        ),
        // Tags carry no meaning here; keep the tagged value.
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match from_yaml(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
