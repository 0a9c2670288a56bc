//! Upstream chat-completion backends

mod openai;

use async_trait::async_trait;
use http::StatusCode;
use secrecy::SecretString;
use thiserror::Error;

pub use openai::OpenAiBackend;

use crate::protocol::openai::{ChatRequest, ChatResponse};

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum BackendError {
    /// Upstream answered with a non-success status
    #[error("upstream returned {status}")]
    Status {
        status: StatusCode,
        /// `error.message` from the upstream body, when present
        message: Option<String>,
    },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// A chat-completion API the format proxy can call
///
/// Each call is one-shot and fully buffered.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Human-readable backend name for logs
    fn name(&self) -> &str;

    /// Send a single non-streaming completion request
    async fn complete(&self, api_key: &SecretString, request: &ChatRequest) -> Result<ChatResponse, BackendError>;
}
