//! Remote API configuration
//!
//! Immutable, built once at startup and passed into the remote generator.
//! The credential comes from the environment; an absent key falls back to
//! an empty string and the call proceeds unauthenticated (the hosting
//! environment is then expected to inject the credential).

use anyhow::{Context, Result};
use url::Url;

use crate::ai::retry::RetryConfig;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default generateContent endpoint
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent";

/// Configuration for the remote generation variant
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Endpoint URL without the credential attached
    pub api_url: Url,
    /// API key; empty means unauthenticated
    pub api_key: String,
    /// Backoff parameters for the outbound call
    pub retry: RetryConfig,
}

impl RemoteConfig {
    /// Build a config for the given endpoint, reading the credential from
    /// the environment
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .with_context(|| format!("invalid remote API URL: {api_url}"))?;
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Ok(Self {
            api_url,
            api_key,
            retry: RetryConfig::default(),
        })
    }

    /// The URL actually posted to, with the key appended when one is set
    pub fn request_url(&self) -> Url {
        let mut url = self.api_url.clone();
        if !self.api_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &self.api_key);
        }
        url
    }
}
