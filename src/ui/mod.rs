//! ui
//!
//! Output utilities shared by the CLI and the orchestrator.

pub mod output;

pub use output::Verbosity;
