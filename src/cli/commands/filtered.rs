//! filtered_layers command - Publish rasters whose name matches a pattern

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::publish::Publisher;

/// Run the filtered_layers command.
///
/// As `multiple_layers`, but only file names matching `pattern` (unanchored
/// regular-expression search) are published.
pub fn filtered_layers(ctx: &Context, directory: &Path, pattern: &str) -> Result<()> {
    let catalog = super::connect(ctx)?;
    let publisher = Publisher::new(&catalog, ctx.verbosity);

    let rt = tokio::runtime::Runtime::new()?;
    let batch = rt.block_on(publisher.publish_filtered(directory, pattern))?;

    super::summarize(&batch, ctx.verbosity);
    Ok(())
}
