//! Sources command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::LoadOptions;

#[derive(Args)]
pub struct SourcesArgs {
    /// Files to merge, lowest precedence first
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

pub fn run(opts: &LoadOptions, args: SourcesArgs) -> Result<()> {
    let config = opts.load(&args.files)?;
    let report = config.report();

    println!("Keys:");
    let width = config.keys().map(str::len).max().unwrap_or(0);
    for key in config.keys() {
        if let Some(origin) = config.origin(key) {
            println!("  {:<width$}  {}", key, origin, width = width);
        }
    }

    if !report.merged.is_empty() {
        println!("Merged:");
        for path in &report.merged {
            println!("  {}", path.display());
        }
    }
    if let Some(env) = &report.env_file {
        println!("Env file: {}", env.display());
    }
    if !report.missing.is_empty() {
        println!("Missing:");
        for path in &report.missing {
            println!("  {}", path.display());
        }
    }
    if !report.skipped.is_empty() {
        println!("Skipped:");
        for (path, reason) in &report.skipped {
            println!("  {} ({})", path.display(), reason);
        }
    }

    Ok(())
}
