//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Surface
//!
//! `geopub <CONFIG> <MODE> ...` where `<CONFIG>` is the JSON configuration
//! file and `<MODE>` is one of `single_layer`, `multiple_layers`,
//! `filtered_layers`, or `completion`. Global flags:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Geopub - publish GeoTIFF rasters to GeoServer
#[derive(Parser, Debug)]
#[command(name = "geopub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file (base_url, username, password,
    /// workspace_name)
    pub config: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish one raster file
    #[command(
        name = "single_layer",
        long_about = "Publish one raster file.\n\n\
            Creates a GeoTIFF coverage store named after the file (stem, \
            lower-cased), publishes a layer from it (store name with the \
            '_tiled' suffix stripped), and assigns the workspace's legend \
            style as the layer's default. A rejected step is reported and \
            the remaining steps are still attempted.",
        after_help = "\
EXAMPLES:
    # Publish a single raster
    geopub geoserver.json single_layer rasters/mapbiomas_2020_tiled.tif"
    )]
    SingleLayer {
        /// Raster file to publish
        path: PathBuf,
    },

    /// Publish every raster file under a directory
    #[command(
        name = "multiple_layers",
        long_about = "Publish every raster file under a directory.\n\n\
            Walks the directory recursively, selects files with a raster \
            extension (.tif/.tiff), and publishes each one. Failed files are \
            reported in the final summary; the batch never aborts on a \
            server-side rejection.",
        after_help = "\
EXAMPLES:
    # Publish a whole directory tree
    geopub geoserver.json multiple_layers rasters/"
    )]
    MultipleLayers {
        /// Directory to walk recursively
        directory: PathBuf,
    },

    /// Publish raster files whose name matches a pattern
    #[command(
        name = "filtered_layers",
        long_about = "Publish raster files whose file name matches a regular \
            expression.\n\n\
            Identical to multiple_layers, with an additional unanchored \
            regex filter applied to each candidate's file name.",
        after_help = "\
EXAMPLES:
    # Publish only the 2020 rasters
    geopub geoserver.json filtered_layers rasters/ 2020

    # Anchor the pattern yourself when needed
    geopub geoserver.json filtered_layers rasters/ '^mapbiomas_'"
    )]
    FilteredLayers {
        /// Directory to walk recursively
        directory: PathBuf,

        /// Regular expression matched against file names (unanchored)
        pattern: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
