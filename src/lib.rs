// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # dataflow-audit
//!
//! Authenticates against a data-routing platform's management API (a
//! self-hosted leader or the cloud control plane), enumerates its worker
//! groups and flattens each group's routes, pipelines, sources and
//! destinations into a single CSV report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dataflow_audit::auth::ScriptedPrompt;
//! use dataflow_audit::cli::{Cli, Runner};
//! use dataflow_audit::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> dataflow_audit::Result<()> {
//!     let cli = Cli::from_args(["dataflow-audit", "onprem"])?;
//!     let mut prompt = ScriptedPrompt::new(["https://leader:9000", "admin", "secret"]);
//!     let summary = Runner::new(cli, Settings::load()?).run(&mut prompt).await?;
//!     println!("{} rows", summary.rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌──────────────┐
//! │   Prompt   │──▶│ Authenticator │──▶│  HttpClient  │ (bearer token)
//! └────────────┘   └───────────────┘   └──────┬───────┘
//!                                             │
//!                         ┌───────────────────┴───────────────────┐
//!                         │          TopologyCollector            │
//!                         │ worker groups → destinations / routes │
//!                         │              / quick connects         │
//!                         └───────────────────┬───────────────────┘
//!                                             │
//!                                   ┌─────────┴─────────┐
//!                                   │  build_report  →  │
//!                                   │  write_report     │ dataflow.csv
//!                                   └───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and report literals
pub mod types;

/// Runtime settings
pub mod config;

/// Credential acquisition and login
pub mod auth;

/// Authenticated HTTP client
pub mod http;

/// Worker group and topology collectors
pub mod topology;

/// Report assembly and CSV output
pub mod report;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;
