//! cli
//!
//! Command-line interface layer for Geopub.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT talk to GeoServer directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::publish`] orchestrator. All network activity flows through the
//! [`crate::geoserver`] catalog abstraction.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::Verbosity;

/// Context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path to the JSON configuration file.
    pub config_path: PathBuf,
    /// Output verbosity from `--quiet` / `--debug`.
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config_path: cli.config.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}
