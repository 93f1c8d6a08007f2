//! Interactive credential acquisition

use super::types::{CredentialBundle, Credentials};
use crate::error::{Error, Result};
use crate::types::DeploymentMode;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

const ONPREM_URL_PROMPT: &str = "Leader URL (https://leader.example.com:9000): ";
const ONPREM_USER_PROMPT: &str = "Login: ";
const ONPREM_PASSWORD_PROMPT: &str = "Password: ";
const CLOUD_URL_PROMPT: &str =
    "Cloud URL (https://<workspaceName>.<organizationId>.cribl.cloud): ";
const CLOUD_CLIENT_ID_PROMPT: &str = "Client ID: ";
const CLOUD_SECRET_PROMPT: &str = "Client Secret (will not echo): ";

/// Source of operator input
pub trait Prompt {
    /// Ask for a visible line of input
    fn line(&mut self, label: &str) -> Result<String>;

    /// Ask for a secret; implementations must not echo it
    fn secret(&mut self, label: &str) -> Result<String>;
}

/// Reads from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn line(&mut self, label: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{label}")?;
        stdout.flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(Error::prompt(format!(
                "stdin closed while waiting for '{}'",
                label.trim_end_matches([' ', ':'])
            )));
        }
        Ok(input)
    }

    fn secret(&mut self, label: &str) -> Result<String> {
        rpassword::prompt_password(label).map_err(|e| Error::prompt(e.to_string()))
    }
}

/// Replays canned answers, in order, regardless of which method asks
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers with `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Labels that were asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    fn next(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("no scripted answer for '{label}'")))
    }
}

impl Prompt for ScriptedPrompt {
    fn line(&mut self, label: &str) -> Result<String> {
        self.next(label)
    }

    fn secret(&mut self, label: &str) -> Result<String> {
        self.next(label)
    }
}

/// Collect the connection parameters and secrets for `mode`
pub fn acquire_credentials<P: Prompt + ?Sized>(
    mode: DeploymentMode,
    prompt: &mut P,
) -> Result<CredentialBundle> {
    let bundle = match mode {
        DeploymentMode::OnPrem => {
            let base_url = prompt.line(ONPREM_URL_PROMPT)?;
            let username = prompt.line(ONPREM_USER_PROMPT)?.trim_end().to_string();
            let password = strip_newline(prompt.secret(ONPREM_PASSWORD_PROMPT)?);
            CredentialBundle::new(base_url, Credentials::OnPrem { username, password })
        }
        DeploymentMode::Cloud => {
            let base_url = prompt.line(CLOUD_URL_PROMPT)?;
            let client_id = prompt.line(CLOUD_CLIENT_ID_PROMPT)?.trim().to_string();
            let client_secret = strip_newline(prompt.secret(CLOUD_SECRET_PROMPT)?);
            CredentialBundle::new(
                base_url,
                Credentials::Cloud {
                    client_id,
                    client_secret,
                },
            )
        }
    };

    if bundle.base_url.trim().is_empty() {
        return Err(Error::invalid_connection("no URL was entered"));
    }

    Ok(bundle)
}

fn strip_newline(mut value: String) -> String {
    while value.ends_with(['\n', '\r']) {
        value.pop();
    }
    value
}
