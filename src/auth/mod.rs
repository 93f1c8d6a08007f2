//! Authentication module
//!
//! Supports the two deployment modes of the management API:
//! - onprem: username / password login against the leader node
//! - cloud: OAuth2 client credentials against the cloud identity service
//!
//! Credentials are gathered through the [`Prompt`] seam, exchanged once for
//! a bearer token by the [`Authenticator`], and handed on as a [`Session`].

mod authenticator;
mod prompt;
mod types;

pub use authenticator::Authenticator;
pub use prompt::{acquire_credentials, Prompt, ScriptedPrompt, TerminalPrompt};
pub use types::{CredentialBundle, Credentials, Session};
