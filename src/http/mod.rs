//! HTTP client module
//!
//! Provides the authenticated client every post-login request goes through.
//!
//! # Features
//!
//! - **Bearer auth**: the session token is attached to every request
//! - **JSON defaults**: `Content-type` and `Accept` set to `application/json`
//! - **Per-mode TLS policy**: self-signed leaders can be accepted in onprem mode
//!
//! Requests are sent exactly once. There is no retry or backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
