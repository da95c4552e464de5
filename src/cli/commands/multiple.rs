//! multiple_layers command - Publish every raster under a directory

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::publish::Publisher;

/// Run the multiple_layers command.
///
/// Walks `directory` recursively and publishes every raster file found.
/// Server-side rejections are reported per file; only transport faults and
/// walk errors abort.
pub fn multiple_layers(ctx: &Context, directory: &Path) -> Result<()> {
    let catalog = super::connect(ctx)?;
    let publisher = Publisher::new(&catalog, ctx.verbosity);

    let rt = tokio::runtime::Runtime::new()?;
    let batch = rt.block_on(publisher.publish_all(directory))?;

    super::summarize(&batch, ctx.verbosity);
    Ok(())
}
