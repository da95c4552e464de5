//! core
//!
//! Domain types and pure logic: configuration, naming rules, server path
//! rewriting, and publish report types. Nothing in this module performs I/O
//! other than [`config`] reading its file once at startup.

pub mod config;
pub mod naming;
pub mod paths;
pub mod types;
