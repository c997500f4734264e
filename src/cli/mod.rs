//! Command-line interface for confmerge
//!
//! Provides `show`, `get` and `sources` subcommands over the same loader options.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod get;
mod show;
mod sources;
mod utils;

use utils::LoadOptions;

/// Merge JSON, TOML, YAML and .env files into one configuration
#[derive(Parser)]
#[command(name = "confmerge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    load: LoadOptions,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration as JSON
    Show(show::ShowArgs),

    /// Print a single value from the merged configuration
    Get(get::GetArgs),

    /// Show which file supplied each key
    Sources(sources::SourcesArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(&cli.load, args),
        Commands::Get(args) => get::run(&cli.load, args),
        Commands::Sources(args) => sources::run(&cli.load, args),
    }
}
