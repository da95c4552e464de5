//! Geopub - publish GeoTIFF rasters to GeoServer
//!
//! Geopub is a single-binary tool that registers raster files with a
//! GeoServer instance over its REST API: it creates a coverage store for the
//! file, publishes a coverage (layer) from the store, and assigns a default
//! display style. Batch modes walk a directory tree and publish every
//! matching raster.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to publish)
//! - [`core`] - Configuration, naming rules, path rewriting, report types
//! - [`geoserver`] - Abstraction over the GeoServer REST catalog
//! - [`publish`] - Orchestrates the create-store → publish-layer → set-style
//!   sequence per file and the directory walk
//! - [`ui`] - Output utilities
//!
//! # Failure model
//!
//! A non-success HTTP status from GeoServer never aborts a batch: each step
//! produces an explicit success/failure report and the next step (and next
//! file) is still attempted. Only transport faults (DNS, connection, TLS)
//! and configuration errors abort the run.

pub mod cli;
pub mod core;
pub mod geoserver;
pub mod publish;
pub mod ui;
