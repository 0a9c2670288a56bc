//! Recording backend for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::backend::{BackendError, ChatBackend};
use crate::protocol::openai::{ChatChoice, ChatRequest, ChatResponse, ChoiceMessage};

type Reply = Box<dyn Fn() -> Result<ChatResponse, BackendError> + Send + Sync>;

/// Backend that records every call and answers with a canned reply
pub struct RecordingBackend {
    calls: Mutex<Vec<(String, ChatRequest)>>,
    reply: Reply,
}

impl RecordingBackend {
    /// Answer every call with a single choice containing `content`
    pub fn replying(content: Option<&str>) -> Self {
        let content = content.map(str::to_owned);
        Self::with_reply(move || Ok(response_with(content.clone())))
    }

    /// Answer every call with the given closure
    pub fn with_reply(reply: impl Fn() -> Result<ChatResponse, BackendError> + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        }
    }

    /// Requests received so far, with the API key each was sent with
    pub fn calls(&self) -> Vec<(String, ChatRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    async fn complete(&self, api_key: &SecretString, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.expose_secret().to_owned(), request.clone()));
        (self.reply)()
    }
}

/// A response whose single choice carries `content`
pub fn response_with(content: Option<String>) -> ChatResponse {
    ChatResponse {
        model: Some("stub-model".to_owned()),
        choices: vec![ChatChoice {
            message: ChoiceMessage {
                role: Some("assistant".to_owned()),
                content,
            },
            finish_reason: Some("stop".to_owned()),
        }],
    }
}
