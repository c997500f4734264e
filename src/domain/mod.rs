//! Core data types shared by the loader, the env parser and the CLI

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Flat top-level mapping from key to value.
pub type ConfigMap = BTreeMap<String, Value>;

/// Decoder selected for a file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
    Unsupported,
}

impl Format {
    /// Pick the format from the text after the last `.` of the file name.
    ///
    /// Matching is exact: `config.JSON` and `config.yml` are unsupported.
    pub fn from_path(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Format::Unsupported;
        };
        match name.rsplit_once('.') {
            Some((_, "json")) => Format::Json,
            Some((_, "toml")) => Format::Toml,
            Some((_, "yaml")) => Format::Yaml,
            _ => Format::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        self != Format::Unsupported
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
            Format::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A requested input file after resolution against the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The path as the caller passed it.
    pub requested: PathBuf,
    /// `requested` joined onto the base directory.
    pub resolved: PathBuf,
    pub format: Format,
}

impl SourceFile {
    pub fn resolve(base_dir: &Path, requested: &Path) -> Self {
        let resolved = base_dir.join(requested);
        let format = Format::from_path(&resolved);
        Self { requested: requested.to_path_buf(), resolved, format }
    }
}

/// Where the final value of a key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    EnvFile(PathBuf),
}

impl Origin {
    pub fn path(&self) -> &Path {
        match self {
            Origin::File(p) | Origin::EnvFile(p) => p,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::File(p) => write!(f, "{}", p.display()),
            Origin::EnvFile(p) => write!(f, "{} (env)", p.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedFormat,
    /// Decode failure swallowed in lenient mode; holds the error message.
    DecodeFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedFormat => f.write_str("unsupported format"),
            SkipReason::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

/// What happened to each source during one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub merged: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub env_file: Option<PathBuf>,
}

/// The merged configuration.
///
/// Built once by [`crate::ConfigLoader::load`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: ConfigMap,
    origins: BTreeMap<String, Origin>,
    report: LoadReport,
}

impl Config {
    pub(crate) fn new(
        values: ConfigMap,
        origins: BTreeMap<String, Origin>,
        report: LoadReport,
    ) -> Self {
        Self { values, origins, report }
    }

    /// Look up a key. Absent keys yield `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Source that supplied the final value of `key`.
    pub fn origin(&self, key: &str) -> Option<&Origin> {
        self.origins.get(key)
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn as_map(&self) -> &ConfigMap {
        &self.values
    }

    pub fn into_map(self) -> ConfigMap {
        self.values
    }

    /// The whole mapping as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.values.clone().into_iter().collect())
    }

    /// Deserialize the merged mapping into an application type.
    pub fn extract<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.to_json())
    }
}
