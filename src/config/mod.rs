//! Configuration loading and merging
//!
//! Loads JSON, TOML and YAML files in the order given and merges their
//! top-level keys, then applies the env file last (Env > later file > earlier file).

pub mod decode;
pub mod loader;
pub mod merge;

pub use loader::{load_config, ConfigLoader, DEFAULT_ENV_FILE};
