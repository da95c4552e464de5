//! single_layer command - Publish one raster file

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::publish::Publisher;
use crate::ui::output;

/// Run the single_layer command.
///
/// This is a synchronous wrapper that uses tokio to run the async publish
/// sequence.
pub fn single_layer(ctx: &Context, path: &Path) -> Result<()> {
    let catalog = super::connect(ctx)?;
    let publisher = Publisher::new(&catalog, ctx.verbosity);

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(publisher.publish_one(path))?;

    if !report.is_success() {
        output::warn(
            format!("publish incomplete for '{}'", path.display()),
            ctx.verbosity,
        );
    }

    Ok(())
}
