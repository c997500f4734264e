//! `.env` file parsing
//!
//! Turns an env definition file into a typed mapping that the loader merges
//! with the highest precedence.

use crate::domain::ConfigMap;
use crate::error::{ConfigError, EnvParseError};
use std::fs;
use std::path::Path;

pub mod infer;
pub mod tokenizer;

pub use infer::{infer_value, strip_quotes};
pub use tokenizer::{tokenize, EnvEntry};

/// Parse env file content. Later assignments overwrite earlier ones.
pub fn parse_env_str(content: &str) -> Result<ConfigMap, EnvParseError> {
    let mut data = ConfigMap::new();
    for entry in tokenize(content)? {
        data.insert(entry.key, infer_value(&entry.raw_value));
    }
    Ok(data)
}

/// Read and parse an env file.
pub fn parse_env_file(path: &Path) -> Result<ConfigMap, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let data = parse_env_str(&content)
        .map_err(|source| ConfigError::Env { path: path.to_path_buf(), source })?;
    tracing::debug!("Parsed {} variables from {}", data.len(), path.display());
    Ok(data)
}
