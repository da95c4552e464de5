//! geoserver::mock
//!
//! Mock catalog implementation for deterministic testing.
//!
//! # Design
//!
//! The mock records every call and answers with success by default. Tests
//! can script per-operation rejections (returned as failed step reports,
//! like a real non-2xx response) or transport faults (returned as errors).
//!
//! # Example
//!
//! ```
//! use geopub::geoserver::mock::{MockCatalog, MockOperation};
//! use geopub::geoserver::CoverageCatalog;
//!
//! # tokio_test::block_on(async {
//! let catalog = MockCatalog::new();
//!
//! let report = catalog
//!     .create_store("mapbiomas_2020_tiled", "file:./data/mapbiomas_2020_tiled.tif")
//!     .await
//!     .unwrap();
//! assert!(report.is_success());
//!
//! assert_eq!(
//!     catalog.operations(),
//!     vec![MockOperation::CreateStore {
//!         store: "mapbiomas_2020_tiled".to_string(),
//!         source_url: "file:./data/mapbiomas_2020_tiled.tif".to_string(),
//!     }]
//! );
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{CatalogError, CoverageCatalog};
use crate::core::types::{PublishStep, StepReport};

/// Mock catalog for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    inner: Arc<Mutex<MockCatalogInner>>,
}

#[derive(Debug, Default)]
struct MockCatalogInner {
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
    /// Scripted server-side rejections.
    reject: Vec<RejectOn>,
    /// Scripted transport fault, consumed by the next matching call.
    fault: Option<(PublishStep, CatalogError)>,
}

/// Scripted rejection: the given step answers with this status/body.
#[derive(Debug, Clone)]
pub struct RejectOn {
    pub step: PublishStep,
    pub status: u16,
    pub body: String,
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    CreateStore { store: String, source_url: String },
    PublishLayer { store: String, layer: String },
    SetDefaultStyle { layer: String, style: String },
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a server-side rejection for every call of `step`.
    pub fn reject(&self, step: PublishStep, status: u16, body: impl Into<String>) {
        self.inner.lock().unwrap().reject.push(RejectOn {
            step,
            status,
            body: body.into(),
        });
    }

    /// Script a transport fault for the next call of `step`.
    pub fn fail_with(&self, step: PublishStep, error: CatalogError) {
        self.inner.lock().unwrap().fault = Some((step, error));
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Number of recorded operations.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().operations.len()
    }

    fn record(&self, step: PublishStep, op: MockOperation) -> Result<StepReport, CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);

        if let Some((fault_step, error)) = inner.fault.take() {
            if fault_step == step {
                return Err(error);
            }
            inner.fault = Some((fault_step, error));
        }

        if let Some(rejection) = inner.reject.iter().find(|r| r.step == step) {
            return Ok(StepReport::failure(
                step,
                rejection.status,
                rejection.body.clone(),
            ));
        }

        Ok(StepReport::success(step))
    }
}

#[async_trait]
impl CoverageCatalog for MockCatalog {
    async fn create_store(
        &self,
        store: &str,
        source_url: &str,
    ) -> Result<StepReport, CatalogError> {
        self.record(
            PublishStep::CreateStore,
            MockOperation::CreateStore {
                store: store.to_string(),
                source_url: source_url.to_string(),
            },
        )
    }

    async fn publish_layer(&self, store: &str, layer: &str) -> Result<StepReport, CatalogError> {
        self.record(
            PublishStep::PublishLayer,
            MockOperation::PublishLayer {
                store: store.to_string(),
                layer: layer.to_string(),
            },
        )
    }

    async fn set_default_style(
        &self,
        layer: &str,
        style: &str,
    ) -> Result<StepReport, CatalogError> {
        self.record(
            PublishStep::SetDefaultStyle,
            MockOperation::SetDefaultStyle {
                layer: layer.to_string(),
                style: style.to_string(),
            },
        )
    }
}
