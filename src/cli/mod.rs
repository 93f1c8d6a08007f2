//! CLI module
//!
//! Command-line interface for producing the data-flow report.
//!
//! # Usage
//!
//! ```text
//! dataflow-audit <cloud|onprem>
//! ```
//!
//! The mode is case-insensitive. Everything else is prompted for
//! interactively or read from the environment (see [`crate::config`]).

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{RunSummary, Runner};
