//! publish::orchestrator
//!
//! Drives the three-step publish sequence and the batch modes.
//!
//! # Failure semantics
//!
//! A rejected step is terminal only for nothing: the remaining steps of the
//! same file and the remaining files of the batch are still attempted, and
//! every outcome lands in the returned report. Transport faults and
//! directory-walk I/O errors abort the run instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use crate::core::naming::{is_raster_file, PublishNames};
use crate::core::paths::ServerPathRules;
use crate::core::types::{BatchReport, FileReport, PublishStep, StepOutcome, StepReport};
use crate::geoserver::{CatalogError, CoverageCatalog};
use crate::ui::output;
use crate::ui::Verbosity;

/// Style assigned as default to every published layer, qualified with the
/// configured workspace at call time.
pub const DEFAULT_STYLE: &str = "mapbiomas_legend";

/// Errors that abort a publish run.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Transport fault from the catalog (DNS, connection, TLS).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Directory traversal failed.
    #[error("failed to read directory '{path}': {source}")]
    Walk { path: PathBuf, source: io::Error },

    /// The filtered mode's pattern is not a valid regular expression.
    #[error("invalid filter pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

/// Publish orchestrator.
///
/// Stateless with respect to the server: nothing is remembered about what
/// was already published, and each file's sequence is independent.
pub struct Publisher<'a> {
    catalog: &'a dyn CoverageCatalog,
    path_rules: ServerPathRules,
    verbosity: Verbosity,
}

impl<'a> Publisher<'a> {
    pub fn new(catalog: &'a dyn CoverageCatalog, verbosity: Verbosity) -> Self {
        Publisher {
            catalog,
            path_rules: ServerPathRules::default(),
            verbosity,
        }
    }

    /// Replace the default local-to-server path rules.
    pub fn with_path_rules(mut self, rules: ServerPathRules) -> Self {
        self.path_rules = rules;
        self
    }

    /// Publish one raster file: create its store, publish its layer, set the
    /// default style. Every step is attempted regardless of earlier
    /// rejections.
    pub async fn publish_one(&self, path: &Path) -> Result<FileReport, PublishError> {
        let Some(names) = PublishNames::from_path(path) else {
            output::warn(
                format!("skipping '{}': cannot derive a store name", path.display()),
                self.verbosity,
            );
            return Ok(FileReport {
                path: path.to_path_buf(),
                store: String::new(),
                layer: String::new(),
                steps: vec![],
            });
        };

        output::debug(
            format!(
                "publishing '{}' as store '{}', layer '{}'",
                path.display(),
                names.store,
                names.layer
            ),
            self.verbosity,
        );

        let source_url = self.path_rules.to_server_url(path);
        let mut steps = Vec::with_capacity(3);

        let report = self.catalog.create_store(&names.store, &source_url).await?;
        self.log_step(&report, &names);
        steps.push(report);

        let report = self
            .catalog
            .publish_layer(&names.store, &names.layer)
            .await?;
        self.log_step(&report, &names);
        steps.push(report);

        let report = self
            .catalog
            .set_default_style(&names.layer, DEFAULT_STYLE)
            .await?;
        self.log_step(&report, &names);
        steps.push(report);

        Ok(FileReport {
            path: path.to_path_buf(),
            store: names.store,
            layer: names.layer,
            steps,
        })
    }

    /// Publish every raster file under `dir`, recursively.
    pub async fn publish_all(&self, dir: &Path) -> Result<BatchReport, PublishError> {
        let files = collect_raster_files(dir)?;
        self.publish_files(files).await
    }

    /// Publish raster files under `dir` whose file name matches `pattern`
    /// (unanchored regular-expression search).
    pub async fn publish_filtered(
        &self,
        dir: &Path,
        pattern: &str,
    ) -> Result<BatchReport, PublishError> {
        let regex = Regex::new(pattern).map_err(|e| PublishError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let files = collect_raster_files(dir)?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| regex.is_match(name))
                    .unwrap_or(false)
            })
            .collect();

        self.publish_files(files).await
    }

    async fn publish_files(&self, files: Vec<PathBuf>) -> Result<BatchReport, PublishError> {
        let mut batch = BatchReport::default();
        for file in files {
            batch.push(self.publish_one(&file).await?);
        }
        Ok(batch)
    }

    /// Print the human-readable outcome line for one step.
    fn log_step(&self, report: &StepReport, names: &PublishNames) {
        match (&report.step, &report.outcome) {
            (PublishStep::CreateStore, StepOutcome::Success) => output::print(
                format!("Coverage store '{}' created successfully.", names.store),
                self.verbosity,
            ),
            (PublishStep::CreateStore, StepOutcome::Failure { status, body }) => {
                output::print(
                    format!(
                        "Failed to create coverage store '{}' (HTTP {}).",
                        names.store, status
                    ),
                    self.verbosity,
                );
                output::print(body, self.verbosity);
            }
            (PublishStep::PublishLayer, StepOutcome::Success) => output::print(
                format!("Layer '{}' published successfully.", names.layer),
                self.verbosity,
            ),
            (PublishStep::PublishLayer, StepOutcome::Failure { status, body }) => {
                output::print(
                    format!("Failed to publish layer '{}' (HTTP {}).", names.layer, status),
                    self.verbosity,
                );
                output::print(body, self.verbosity);
            }
            (PublishStep::SetDefaultStyle, StepOutcome::Success) => output::print(
                format!("Default style {} set successfully.", DEFAULT_STYLE),
                self.verbosity,
            ),
            (PublishStep::SetDefaultStyle, StepOutcome::Failure { status, body }) => {
                output::print(
                    format!(
                        "Failed to set the default style '{}' (HTTP {}).",
                        DEFAULT_STYLE, status
                    ),
                    self.verbosity,
                );
                output::print(body, self.verbosity);
            }
        }
    }
}

/// Recursively collect raster files under `dir`, in traversal order.
///
/// Traversal order follows the OS directory order; callers must not depend
/// on it.
fn collect_raster_files(dir: &Path) -> Result<Vec<PathBuf>, PublishError> {
    let mut files = Vec::new();
    visit(dir, &mut files)?;
    Ok(files)
}

fn visit(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), PublishError> {
    let entries = fs::read_dir(dir).map_err(|source| PublishError::Walk {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| PublishError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            visit(&path, files)?;
        } else if is_raster_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}
