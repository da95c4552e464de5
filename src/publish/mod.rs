//! publish
//!
//! The publish orchestrator: derives names, walks directories, and drives a
//! [`CoverageCatalog`] through the create-store → publish-layer → set-style
//! sequence per file.
//!
//! [`CoverageCatalog`]: crate::geoserver::CoverageCatalog

mod orchestrator;

pub use orchestrator::{Publisher, PublishError, DEFAULT_STYLE};
