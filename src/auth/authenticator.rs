//! Authenticator implementation
//!
//! Exchanges a [`CredentialBundle`] for a bearer token. There is no token
//! cache and no refresh: the token lives for exactly one run.

use super::types::{CredentialBundle, Credentials, Session};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::DeploymentMode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Leader login path, relative to the leader URL
const ONPREM_LOGIN_PATH: &str = "api/v1/auth/login";

/// Authenticator turns operator credentials into a [`Session`]
#[derive(Debug, Clone)]
pub struct Authenticator {
    cloud_token_url: String,
    cloud_audience: String,
    timeout: Duration,
    onprem_accept_invalid_certs: bool,
}

impl Authenticator {
    /// Create an authenticator from run settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            cloud_token_url: settings.cloud_token_url.clone(),
            cloud_audience: settings.cloud_audience.clone(),
            timeout: settings.request_timeout(),
            onprem_accept_invalid_certs: settings.onprem_accept_invalid_certs,
        }
    }

    /// Log in and return the session for the rest of the run
    ///
    /// Fails with [`Error::InvalidConnection`] when the URL is malformed or
    /// the host cannot be reached, and with [`Error::Authentication`] for
    /// everything else (rejected credentials, unexpected response shape).
    pub async fn authenticate(&self, bundle: &CredentialBundle) -> Result<Session> {
        let base_url = validate_base_url(&bundle.base_url)?;

        let token = match &bundle.credentials {
            Credentials::OnPrem { username, password } => {
                self.login_onprem(&base_url, username, password).await?
            }
            Credentials::Cloud {
                client_id,
                client_secret,
            } => self.login_cloud(client_id, client_secret).await?,
        };

        info!(mode = %bundle.mode(), url = %base_url, "Authenticated");

        Ok(Session {
            token,
            base_url,
            mode: bundle.mode(),
        })
    }

    /// `POST {leader}/api/v1/auth/login`, token in `token`
    async fn login_onprem(&self, base_url: &str, username: &str, password: &str) -> Result<String> {
        let client = self.http_client(DeploymentMode::OnPrem)?;
        let login_url = format!("{base_url}/{ONPREM_LOGIN_PATH}");
        let body = LoginRequest { username, password };

        self.post_for_token(&client, &login_url, &body, "token").await
    }

    /// OAuth2 client credentials, token in `access_token`
    async fn login_cloud(&self, client_id: &str, client_secret: &str) -> Result<String> {
        let client = self.http_client(DeploymentMode::Cloud)?;
        let body = ClientCredentialsRequest {
            audience: &self.cloud_audience,
            grant_type: "client_credentials",
            client_id,
            client_secret,
        };

        self.post_for_token(&client, &self.cloud_token_url, &body, "access_token")
            .await
    }

    async fn post_for_token<B: Serialize + ?Sized>(
        &self,
        client: &Client,
        url: &str,
        body: &B,
        token_field: &str,
    ) -> Result<String> {
        debug!(url, "POST login");

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::invalid_connection(e.to_string()))?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let text = response.text().await.unwrap_or_default();

        if !success {
            return Err(Error::authentication(status, text));
        }

        extract_token(&text, token_field).ok_or_else(|| Error::authentication(status, text))
    }

    fn http_client(&self, mode: DeploymentMode) -> Result<Client> {
        let insecure = mode == DeploymentMode::OnPrem && self.onprem_accept_invalid_certs;
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(format!("dataflow-audit/{}", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(client)
    }
}

/// Leader login body
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Cloud token request body
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    audience: &'a str,
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Check the operator-supplied URL and normalise it (no trailing `/`)
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::invalid_connection(format!("'{trimmed}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(Error::invalid_connection(format!(
            "'{trimmed}' must be an http(s) URL with a host"
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Pull a string token out of a JSON body
fn extract_token(body: &str, field: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(String::from)
}
