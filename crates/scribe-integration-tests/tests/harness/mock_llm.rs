//! Mock upstream for integration tests
//!
//! Implements `POST /v1/chat/completions` with a canned behaviour and
//! records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// How the mock answers completion requests
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// 200 with a single choice carrying this content (`None` sends `null`)
    Reply(Option<String>),
    /// Non-success status with a raw body
    Fail { status: StatusCode, body: String },
}

/// A completion request as the mock saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// Mock upstream that returns predictable responses
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    behaviour: Behaviour,
    requests: Mutex<Vec<Recorded>>,
}

impl MockLlm {
    /// Start a mock that replies with `content`
    pub async fn replying(content: &str) -> anyhow::Result<Self> {
        Self::start(Behaviour::Reply(Some(content.to_owned()))).await
    }

    /// Start a mock that fails every request
    pub async fn failing(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        Self::start(Behaviour::Fail {
            status,
            body: body.to_owned(),
        })
        .await
    }

    /// Start the mock server, returning immediately
    pub async fn start(behaviour: Behaviour) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            behaviour,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream
    ///
    /// Includes `/v1` since the backend appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let model = body["model"].as_str().unwrap_or("unknown").to_owned();
    state.requests.lock().unwrap().push(Recorded { authorization, body });

    match &state.behaviour {
        Behaviour::Reply(content) => Json(serde_json::json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "created": 0,
            "model": model,
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }))
        .into_response(),
        Behaviour::Fail { status, body } => (*status, body.clone()).into_response(),
    }
}
