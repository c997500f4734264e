//! Get command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{format_value, LoadOptions};

#[derive(Args)]
pub struct GetArgs {
    /// Key to look up
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Files to merge, lowest precedence first
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Also print which file supplied the value
    #[arg(long)]
    pub origin: bool,
}

pub fn run(opts: &LoadOptions, args: GetArgs) -> Result<()> {
    let config = opts.load(&args.files)?;

    let Some(value) = config.get(&args.key) else {
        anyhow::bail!("Key not found: {}", args.key);
    };
    println!("{}", format_value(value));

    if args.origin {
        if let Some(origin) = config.origin(&args.key) {
            println!("from {}", origin);
        }
    }

    Ok(())
}
