//! Authenticated HTTP client
//!
//! Holds the base URL, default headers and bearer token for a run so that
//! collectors never touch shared header state.

use crate::auth::Session;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::{DeploymentMode, StringMap};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Bearer token attached to every request
    pub bearer_token: Option<String>,
    /// Skip certificate validation
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = StringMap::new();
        default_headers.insert("Content-type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers,
            user_agent: format!("dataflow-audit/{}", env!("CARGO_PKG_VERSION")),
            bearer_token: None,
            accept_invalid_certs: false,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .field("has_bearer_token", &self.bearer_token.is_some())
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Accept self-signed or otherwise invalid certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client carrying a session's credentials
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create the client used for every request after login
    pub fn for_session(session: &Session, settings: &Settings) -> Result<Self> {
        let accept_invalid_certs =
            session.mode == DeploymentMode::OnPrem && settings.onprem_accept_invalid_certs;

        let config = HttpClientConfig::builder()
            .base_url(session.base_url.clone())
            .timeout(settings.request_timeout())
            .bearer_token(session.token.clone())
            .accept_invalid_certs(accept_invalid_certs)
            .build();

        Self::with_config(config)
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path).await
    }

    /// Send a single request
    ///
    /// The management API answers reads with `200 OK`; any other status,
    /// including other 2xx codes, becomes [`Error::HttpStatus`].
    pub async fn request(&self, method: Method, path: &str) -> Result<Response> {
        let full_url = self.build_url(path);

        let mut req = self.client.request(method.clone(), &full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(token) = &self.config.bearer_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed: {} {} -> {}", method, full_url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {} {}", method, full_url);
        Ok(response)
    }

    /// Make a GET request and parse the JSON response
    ///
    /// Bodies that do not match `T` surface as [`Error::JsonParse`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        let text = response.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
