//! The format operation

use std::sync::Arc;

use scribe_config::{DEFAULT_BASE_URL, FormatConfig};
use secrecy::SecretString;
use url::Url;

use crate::backend::{BackendError, ChatBackend, OpenAiBackend};
use crate::error::FormatError;
use crate::prompt::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, MAX_OUTPUT_TOKENS, formatting_prompt};
use crate::protocol::openai::{ChatMessage, ChatRequest};
use crate::types::{ClientConfig, FormatRequest, FormatResponse};

/// Fallback when the upstream error body carries no message
const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown OpenAI API error";

/// Message returned when the upstream could not be reached or decoded
const FORMAT_FAILED: &str = "Failed to format content";

/// Stateless formatting proxy
///
/// Holds an immutable snapshot of its configuration; concurrent calls share
/// nothing mutable.
pub struct FormatService {
    backend: Arc<dyn ChatBackend>,
    api_key: Option<SecretString>,
    models: Vec<String>,
}

impl FormatService {
    pub fn new(backend: Arc<dyn ChatBackend>, api_key: Option<SecretString>, models: Vec<String>) -> Self {
        Self {
            backend,
            api_key,
            models,
        }
    }

    /// Build the service with an OpenAI-compatible backend
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn from_config(config: &FormatConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        if config.credential().is_none() {
            tracing::warn!("no API key configured, format requests will be rejected");
        }

        Self::new(
            Arc::new(OpenAiBackend::new(base_url)),
            config.credential().cloned(),
            config.models.clone(),
        )
    }

    /// Reformat editor content through the upstream model
    ///
    /// Content and temperature are validated before the credential is
    /// checked, and none of the failures before the upstream call make a
    /// network request.
    pub async fn format(&self, request: FormatRequest) -> Result<FormatResponse, FormatError> {
        let content = non_empty(request.content).ok_or(FormatError::MissingContent)?;
        let temperature = resolve_temperature(request.temperature)?;

        let Some(api_key) = self.api_key.as_ref() else {
            tracing::error!("API key not configured");
            return Err(FormatError::NotConfigured);
        };

        let model = non_empty(request.model).unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let system_prompt = non_empty(request.system_prompt).unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_owned());

        let chat_request = ChatRequest {
            model,
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(formatting_prompt(&content)),
            ],
            temperature,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        tracing::info!(
            backend = self.backend.name(),
            model = %chat_request.model,
            temperature,
            "calling upstream"
        );

        let response = self
            .backend
            .complete(api_key, &chat_request)
            .await
            .map_err(upstream_error)?;

        let formatted_content = non_empty(response.first_content()).ok_or_else(|| {
            tracing::warn!(model = %chat_request.model, "upstream returned no content");
            FormatError::EmptyCompletion
        })?;

        Ok(FormatResponse { formatted_content })
    }

    /// Settings for the editor's configuration dialog
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            default_model: DEFAULT_MODEL.to_owned(),
            default_temperature: DEFAULT_TEMPERATURE,
            default_system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(),
            models: self.models.clone(),
            configured: self.api_key.is_some(),
        }
    }
}

/// Apply the default and reject values outside `[0, 1]`
fn resolve_temperature(temperature: Option<f64>) -> Result<f64, FormatError> {
    match temperature {
        None => Ok(DEFAULT_TEMPERATURE),
        Some(t) if (0.0..=1.0).contains(&t) => Ok(t),
        Some(t) => Err(FormatError::InvalidTemperature(t)),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn upstream_error(error: BackendError) -> FormatError {
    tracing::error!(error = %error, "error formatting content");

    match error {
        BackendError::Status { message, .. } => {
            FormatError::Upstream(message.unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR.to_owned()))
        }
        BackendError::Transport(_) | BackendError::Decode(_) => FormatError::Upstream(FORMAT_FAILED.to_owned()),
    }
}
