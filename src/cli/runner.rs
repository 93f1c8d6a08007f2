//! CLI runner - executes a report run

use crate::auth::{acquire_credentials, Authenticator, Prompt};
use crate::cli::commands::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::http::HttpClient;
use crate::report::{build_report, write_report};
use crate::topology::TopologyCollector;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Worker groups included after filtering
    pub worker_groups: usize,
    /// Data rows written, header excluded
    pub rows: usize,
    /// Report location
    pub output_path: PathBuf,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
    settings: Settings,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli, settings: Settings) -> Self {
        Self { cli, settings }
    }

    /// Acquire credentials, log in, collect topology and write the report
    pub async fn run<P: Prompt + ?Sized>(&self, prompt: &mut P) -> Result<RunSummary> {
        let bundle = acquire_credentials(self.cli.mode, prompt)?;

        let session = Authenticator::new(&self.settings)
            .authenticate(&bundle)
            .await?;

        let started = Instant::now();
        let client = HttpClient::for_session(&session, &self.settings)?;
        debug!(
            accept_invalid_certs = client.config().accept_invalid_certs,
            "Session client ready"
        );
        let collector = TopologyCollector::new(&client);

        let groups = collector.worker_groups().await?;
        let topology = collector.collect(&groups).await?;
        let rows = build_report(&topology);

        let written = write_report(&rows, &self.settings.output_path)?;
        info!(
            rows = written,
            path = %self.settings.output_path.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Report written"
        );

        Ok(RunSummary {
            worker_groups: groups.len(),
            rows: written,
            output_path: self.settings.output_path.clone(),
        })
    }
}
