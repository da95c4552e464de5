//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the configuration (fatal on failure, before any network I/O)
//! 2. Builds the REST catalog client and the publish orchestrator
//! 3. Runs the publish flow and prints the batch summary
//!
//! # Async Commands
//!
//! Publishing is async because it involves network I/O. Handlers create a
//! tokio runtime and `block_on` the orchestrator; execution stays fully
//! sequential.

mod completion;
mod filtered;
mod multiple;
mod single;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use filtered::filtered_layers;
pub use multiple::multiple_layers;
pub use single::single_layer;

use anyhow::Result;

use super::args::Command;
use super::Context;
use crate::core::config::Config;
use crate::core::types::BatchReport;
use crate::geoserver::GeoServerRest;
use crate::ui::output;
use crate::ui::Verbosity;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::SingleLayer { path } => single_layer(ctx, &path),
        Command::MultipleLayers { directory } => multiple_layers(ctx, &directory),
        Command::FilteredLayers { directory, pattern } => {
            filtered_layers(ctx, &directory, &pattern)
        }
        Command::Completion { shell } => completion(shell),
    }
}

/// Load configuration and build the REST catalog client.
///
/// Configuration failures abort here, before any network activity.
fn connect(ctx: &Context) -> Result<GeoServerRest> {
    let config = Config::load(&ctx.config_path)?;
    output::debug(
        format!(
            "publishing to '{}', workspace '{}'",
            config.base_url, config.workspace_name
        ),
        ctx.verbosity,
    );
    Ok(GeoServerRest::new(&config))
}

/// Print the end-of-batch summary line.
fn summarize(batch: &BatchReport, verbosity: Verbosity) {
    if batch.is_empty() {
        output::print("No matching raster files found.", verbosity);
    } else {
        output::print(
            format!(
                "Published {} of {} rasters ({} failed).",
                batch.succeeded(),
                batch.files.len(),
                batch.failed()
            ),
            verbosity,
        );
    }
}
