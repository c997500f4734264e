//! Library error types

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when loading a configuration fails.
///
/// Every variant carries the path of the file that caused it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read (permissions, directory, bad UTF-8).
    #[error("Failed reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON syntax in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML syntax in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid YAML syntax in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document decoded fine but its top level is not a key/value mapping.
    #[error("Expected a mapping at the top level of {}, found {found}", .path.display())]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("Invalid env file {}: {source}", .path.display())]
    Env {
        path: PathBuf,
        #[source]
        source: EnvParseError,
    },
}

impl ConfigError {
    /// Path of the file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Json { path, .. }
            | ConfigError::Toml { path, .. }
            | ConfigError::Yaml { path, .. }
            | ConfigError::NotAMapping { path, .. }
            | ConfigError::Env { path, .. } => path,
        }
    }

    /// True for failures caused by file content rather than file access.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Json { .. }
                | ConfigError::Toml { .. }
                | ConfigError::Yaml { .. }
                | ConfigError::NotAMapping { .. }
        )
    }
}

/// A line of an env file that is not a `KEY=VALUE` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct EnvParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: EnvParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvParseErrorKind {
    #[error("expected KEY=VALUE, found {0:?}")]
    MissingSeparator(String),

    #[error("no variable name (letters, digits, underscore) directly before '=' in {0:?}")]
    InvalidKey(String),
}
