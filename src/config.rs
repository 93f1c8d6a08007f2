//! Runtime settings
//!
//! The command line only carries the deployment mode, so everything else a
//! run needs is resolved here: built-in defaults, an optional YAML file named
//! by `DATAFLOW_AUDIT_CONFIG`, then individual environment overrides.

use crate::error::{Error, Result};
use crate::types::DEFAULT_OUTPUT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Env var naming a YAML settings file
pub const CONFIG_ENV: &str = "DATAFLOW_AUDIT_CONFIG";

/// Env var overriding the report path
pub const OUTPUT_ENV: &str = "DATAFLOW_AUDIT_OUTPUT";

/// Env var overriding the per-request timeout, in seconds
pub const TIMEOUT_ENV: &str = "DATAFLOW_AUDIT_TIMEOUT_SECS";

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the report is written (overwritten every run)
    pub output_path: PathBuf,

    /// OAuth token endpoint for cloud logins
    pub cloud_token_url: String,

    /// OAuth audience for cloud logins
    pub cloud_audience: String,

    /// Timeout applied to every HTTP request
    pub request_timeout_secs: u64,

    /// Skip certificate validation for every call to an on-prem leader
    pub onprem_accept_invalid_certs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            cloud_token_url: "https://login.cribl.cloud/oauth/token".to_string(),
            cloud_audience: "https://api.cribl.cloud".to_string(),
            request_timeout_secs: 30,
            onprem_accept_invalid_certs: true,
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Resolve settings using `lookup` in place of the environment
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(output) = lookup(OUTPUT_ENV) {
            settings.output_path = PathBuf::from(output);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            settings.request_timeout_secs = raw.trim().parse().map_err(|_| {
                Error::config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read settings file '{path}': {e}")))?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML; missing keys keep their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than zero"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::config("output_path must not be empty"));
        }
        url::Url::parse(&self.cloud_token_url)
            .map_err(|e| Error::config(format!("cloud_token_url is not a valid URL: {e}")))?;
        Ok(())
    }
}
