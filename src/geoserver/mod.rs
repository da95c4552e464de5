//! geoserver
//!
//! Abstraction over the GeoServer REST catalog.
//!
//! # Architecture
//!
//! The `CoverageCatalog` trait defines the three remote operations a publish
//! sequence needs: create a coverage store, publish a coverage (layer) from
//! it, and assign a default style. The orchestrator only sees the trait.
//!
//! A non-success HTTP status is a normal outcome here: each operation
//! returns a [`StepReport`] carrying either success or the server's status
//! and body. Only transport faults surface as [`CatalogError`].
//!
//! # Modules
//!
//! - `traits`: Core `CoverageCatalog` trait and error type
//! - [`rest`]: REST implementation over `reqwest` with basic auth
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! [`StepReport`]: crate::core::types::StepReport

pub mod mock;
pub mod rest;
mod traits;

pub use rest::GeoServerRest;
pub use traits::*;
