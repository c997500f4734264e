//! confmerge: merge configuration files into one mapping

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
