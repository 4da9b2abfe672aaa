//! Shellac CLI - declarative HTML document assembler.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "shellac")]
#[command(about = "Assemble HTML documents from a declarative manifest")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to shellac.toml manifest file
    #[arg(short, long, default_value = "shellac.toml")]
    manifest: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble every document in the manifest
    Build {
        /// Project root override (defaults to the manifest setting)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Write a starter manifest and sample sources
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { root } => {
            commands::build::run(&cli.manifest, root)?;
        }
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
    }

    Ok(())
}
