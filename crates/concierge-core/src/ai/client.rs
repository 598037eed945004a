//! Retrying HTTP client for the remote generation API

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::ai::retry::with_retry;
use crate::config::RemoteConfig;
use crate::error::GenerateError;

/// Thin wrapper over reqwest that owns the retry policy
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// POST the payload to the configured endpoint and decode the JSON body.
    ///
    /// A 429 goes back through the backoff loop; any other failure status or
    /// transport error surfaces immediately. The exhaustion error names the
    /// credential-free endpoint so the key never lands in logs.
    pub async fn post_json(&self, payload: &Value) -> Result<Value, GenerateError> {
        let url = self.config.request_url();
        let endpoint = self.config.api_url.as_str();
        debug!("Posting generation request to {}", endpoint);

        with_retry(&self.config.retry, endpoint, || {
            let request = self.http.post(url.clone()).json(payload);
            async move {
                let response = request.send().await?;
                let status = response.status();
                if status == StatusCode::TOO_MANY_REQUESTS {
                    return Err(GenerateError::RateLimited);
                }
                if !status.is_success() {
                    return Err(GenerateError::UpstreamStatus(status));
                }
                Ok(response.json::<Value>().await?)
            }
        })
        .await
    }
}
