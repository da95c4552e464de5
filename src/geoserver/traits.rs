//! geoserver::traits
//!
//! The `CoverageCatalog` trait for driving a remote map-server catalog.
//!
//! # Design
//!
//! The trait is async because every operation is network I/O. Methods
//! return `Result<StepReport, CatalogError>`: the `Ok` side covers both
//! accepted requests and server-side rejections (non-success HTTP status,
//! reported with the response body); the `Err` side is reserved for
//! transport faults, which abort the whole run.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::StepReport;

/// Errors from catalog operations.
///
/// Server-side rejections are not errors; they come back as failed
/// [`StepReport`]s. These variants cover faults below the HTTP layer.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Network or connection error (DNS, refused connection, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be constructed (malformed base URL or header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// The three catalog operations of a publish sequence.
///
/// Implementations must be `Send + Sync` so one client can drive an entire
/// batch.
#[async_trait]
pub trait CoverageCatalog: Send + Sync {
    /// Create a GeoTIFF coverage store named `store`, backed by
    /// `source_url` (a server-visible `file:` URL produced by
    /// [`ServerPathRules`]).
    ///
    /// Success is 201 Created.
    ///
    /// [`ServerPathRules`]: crate::core::paths::ServerPathRules
    async fn create_store(&self, store: &str, source_url: &str)
        -> Result<StepReport, CatalogError>;

    /// Publish coverage `layer` from store `store` with the service's fixed
    /// metadata (EPSG:4326, standard interpolation methods, keyword set).
    ///
    /// Success is 201 Created.
    async fn publish_layer(&self, store: &str, layer: &str) -> Result<StepReport, CatalogError>;

    /// Assign `style` (qualified with the workspace) as the default style
    /// of `layer`.
    ///
    /// Success is 200 OK.
    async fn set_default_style(&self, layer: &str, style: &str)
        -> Result<StepReport, CatalogError>;
}
