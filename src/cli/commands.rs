//! CLI argument parsing

use crate::error::{Error, Result};
use crate::types::DeploymentMode;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Export worker group routes, pipelines and destinations to CSV
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dataflow-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Deployment type: `cloud` or `onprem`
    #[arg(value_enum, ignore_case = true)]
    pub mode: DeploymentMode,
}

impl Cli {
    /// Parse arguments, turning every parse failure into [`Error::Usage`]
    ///
    /// `--help` and `--version` come back as [`Error::Help`] so the caller
    /// decides how to print them and whether to exit.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(Error::Help(e))
            }
            Err(_) => Err(Error::Usage),
        }
    }
}
