//! Common types used throughout dataflow-audit
//!
//! Shared type definitions, type aliases and the literals that end up in
//! the rendered report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Report Literals
// ============================================================================

/// Pipeline id meaning "no transformation"
pub const PASSTHRU_PIPELINE: &str = "passthru";

/// Route name used for rows derived from quick-connect wiring
pub const QUICK_CONNECT_LABEL: &str = "Quick Connect";

/// Destination type placeholder for quick-connect rows
pub const VALIDATE_MANUALLY: &str = "Validate Manually";

/// Column headers of the rendered report, in order
pub const REPORT_HEADERS: [&str; 6] = [
    "Worker Group",
    "Route Name",
    "Filter",
    "Pipeline",
    "Destination Name",
    "Destination Type",
];

/// Default report file name, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "dataflow.csv";

// ============================================================================
// Deployment Mode
// ============================================================================

/// Where the management API lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Multi-tenant cloud control plane (OAuth client credentials)
    #[value(name = "cloud")]
    Cloud,
    /// Self-hosted leader node (username / password login)
    #[value(name = "onprem")]
    OnPrem,
}

impl DeploymentMode {
    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentMode::Cloud => "cloud",
            DeploymentMode::OnPrem => "onprem",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
