//! Credential and session types

use crate::types::DeploymentMode;
use std::fmt;

/// Secrets for one deployment mode
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Leader login
    OnPrem {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// OAuth2 client credentials
    Cloud {
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
    },
}

impl Credentials {
    /// The deployment mode these credentials belong to
    pub fn mode(&self) -> DeploymentMode {
        match self {
            Credentials::OnPrem { .. } => DeploymentMode::OnPrem,
            Credentials::Cloud { .. } => DeploymentMode::Cloud,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::OnPrem { username, .. } => f
                .debug_struct("OnPrem")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Cloud { client_id, .. } => f
                .debug_struct("Cloud")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
        }
    }
}

/// Everything the operator supplied for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialBundle {
    /// Leader or workspace URL, trailing whitespace removed
    pub base_url: String,
    /// Mode-specific secrets
    pub credentials: Credentials,
}

impl CredentialBundle {
    /// Create a bundle, trimming trailing whitespace from the URL
    pub fn new(base_url: impl AsRef<str>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end().to_string(),
            credentials,
        }
    }

    /// Deployment mode of the bundle
    pub fn mode(&self) -> DeploymentMode {
        self.credentials.mode()
    }
}

/// Result of a successful login, valid for the rest of the run
#[derive(Clone)]
pub struct Session {
    /// Bearer token
    pub token: String,
    /// API base URL every later request is made against
    pub base_url: String,
    /// Mode the session was opened in
    pub mode: DeploymentMode,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_bundle_trims_trailing_whitespace() {
        let bundle = CredentialBundle::new(
            "https://leader.example.com:9000 \r\n",
            Credentials::OnPrem {
                username: "admin".to_string(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(bundle.base_url, "https://leader.example.com:9000");
        assert_eq!(bundle.mode(), DeploymentMode::OnPrem);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::Cloud {
            client_id: "id-1".to_string(),
            client_secret: "s3cret".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("id-1"));
        assert!(!rendered.contains("s3cret"));

        let session = Session {
            token: "tok-abc".to_string(),
            base_url: "https://x".to_string(),
            mode: DeploymentMode::Cloud,
        };
        assert!(!format!("{session:?}").contains("tok-abc"));
    }
}
