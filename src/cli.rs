//! Command-line interface for import-project
//!
//! Parses the path flags and drives the three stages in fixed order:
//! import config, set up the project structure, apply transformations.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{config, structure, transform};

/// Scaffold a project directory with JSON-driven placeholder substitution
#[derive(Parser)]
#[command(name = "import-project")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file (.json is appended if absent)
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Directory whose files receive placeholder substitution
    #[arg(long, value_name = "DIR")]
    target_dir: PathBuf,

    /// Source directory for the project structure
    #[arg(long, value_name = "DIR")]
    source_dir: PathBuf,

    /// Destination directory for the project setup (replaced if present)
    #[arg(long, value_name = "DIR")]
    destination_dir: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
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

    config::import_config(&cli.config)?;
    structure::setup_project_structure(&cli.source_dir, &cli.destination_dir)?;
    // The same --config document doubles as the transformation map.
    transform::apply_transformations(&cli.config, &cli.target_dir)?;
    Ok(())
}
