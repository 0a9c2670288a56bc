//! OpenAI-compatible backend

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{BackendError, ChatBackend};
use crate::protocol::openai::{ChatRequest, ChatResponse, ErrorResponse};

/// Calls `{base_url}/chat/completions` with bearer authentication
pub struct OpenAiBackend {
    client: Client,
    base_url: Url,
}

impl OpenAiBackend {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, api_key: &SecretString, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(backend = self.name(), error = %e, "upstream request failed");
                BackendError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(backend = self.name(), %status, body = %body, "upstream returned error");
            return Err(BackendError::Status {
                status,
                message: ErrorResponse::message_from_body(&body),
            });
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            tracing::error!(backend = self.name(), error = %e, "failed to parse upstream response");
            BackendError::Decode(e.to_string())
        })
    }
}
