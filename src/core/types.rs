//! core::types
//!
//! Publish report types.
//!
//! Every remote step yields an explicit [`StepReport`] instead of only a
//! printed line; the orchestrator folds them into [`FileReport`]s and a
//! [`BatchReport`]. A failed step carries the HTTP status and raw response
//! body the server returned.

use std::path::PathBuf;

use serde::Serialize;

/// The three steps of a publish sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStep {
    /// Create the coverage store referencing the raster file.
    CreateStore,
    /// Publish a coverage (layer) from the store.
    PublishLayer,
    /// Assign the default style to the layer.
    SetDefaultStyle,
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStep::CreateStore => write!(f, "create store"),
            PublishStep::PublishLayer => write!(f, "publish layer"),
            PublishStep::SetDefaultStyle => write!(f, "set default style"),
        }
    }
}

/// Outcome of one remote step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The server accepted the request.
    Success,
    /// The server answered with a non-success status.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for diagnosis.
        body: String,
    },
}

/// One step's result within a file's publish sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: PublishStep,
    pub outcome: StepOutcome,
}

impl StepReport {
    /// Build a success report for a step.
    pub fn success(step: PublishStep) -> Self {
        StepReport {
            step,
            outcome: StepOutcome::Success,
        }
    }

    /// Build a failure report carrying the server's status and body.
    pub fn failure(step: PublishStep, status: u16, body: impl Into<String>) -> Self {
        StepReport {
            step,
            outcome: StepOutcome::Failure {
                status,
                body: body.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, StepOutcome::Success)
    }
}

/// Publish results for a single raster file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Source file path as given to the orchestrator.
    pub path: PathBuf,
    /// Derived coverage store name.
    pub store: String,
    /// Derived layer name.
    pub layer: String,
    /// Step reports in execution order. Shorter than three only when name
    /// derivation failed before any call was made.
    pub steps: Vec<StepReport>,
}

impl FileReport {
    /// True when every step succeeded.
    pub fn is_success(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(StepReport::is_success)
    }
}

/// Aggregated results for a batch of files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Number of files whose full sequence succeeded.
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    /// Number of files with at least one failed or missing step.
    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
