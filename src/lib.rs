//! confmerge: merge JSON, TOML, YAML and `.env` files into one configuration
//!
//! Files are merged in the order given, later files overriding earlier keys,
//! and a `.env` file in the base directory is applied last.

pub mod config;
pub mod domain;
pub mod env;
pub mod error;

pub use config::{load_config, ConfigLoader, DEFAULT_ENV_FILE};
pub use domain::{Config, ConfigMap, Format, LoadReport, Origin, SkipReason, SourceFile};
pub use env::{parse_env_file, parse_env_str};
pub use error::{ConfigError, EnvParseError, EnvParseErrorKind};
