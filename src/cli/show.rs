//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::LoadOptions;

#[derive(Args)]
pub struct ShowArgs {
    /// Files to merge, lowest precedence first
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(opts: &LoadOptions, args: ShowArgs) -> Result<()> {
    let config = opts.load(&args.files)?;
    let json = config.to_json();

    let rendered = if args.compact {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };
    println!("{}", rendered);

    Ok(())
}
