//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use confmerge::{Config, ConfigLoader};
use serde_json::Value;
use std::path::PathBuf;

/// Loader settings shared by every subcommand.
#[derive(Args, Debug)]
pub struct LoadOptions {
    /// Directory that relative file paths and the env file resolve against
    #[arg(short = 'C', long, global = true, value_name = "DIR", env = "CONFMERGE_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Skip files that fail to decode instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Env file name inside the base directory
    #[arg(long, global = true, value_name = "NAME", default_value = confmerge::DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Do not apply any env file
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,
}

impl LoadOptions {
    pub fn loader(&self) -> Result<ConfigLoader> {
        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        if !base_dir.is_dir() {
            anyhow::bail!("Base directory is not a directory: {}", base_dir.display());
        }

        let loader = ConfigLoader::new(base_dir).strict(!self.lenient);
        Ok(if self.no_env_file {
            loader.without_env_file()
        } else {
            loader.env_file(self.env_file.clone())
        })
    }

    pub fn load(&self, files: &[PathBuf]) -> Result<Config> {
        let loader = self.loader()?;
        loader.load(files).context("Failed to load configuration")
    }
}

/// Render a value for terminal output: strings bare, everything else as JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
