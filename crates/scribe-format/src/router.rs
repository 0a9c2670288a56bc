//! Axum route handlers for the editor-facing endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};

use crate::error::FormatError;
use crate::markdown::html_to_markdown;
use crate::service::FormatService;
use crate::types::{ErrorBody, FormatRequest, MarkdownRequest, MarkdownResponse};

/// Path of the markdown conversion endpoint
pub const MARKDOWN_PATH: &str = "/api/markdown";

/// Path of the client configuration endpoint
pub const CONFIG_PATH: &str = "/api/config";

/// Build the router with the format endpoint mounted at `format_path`
pub fn format_router(service: Arc<FormatService>, format_path: &str) -> Router {
    Router::new()
        .route(format_path, routing::post(format_content))
        .route(MARKDOWN_PATH, routing::post(convert_markdown))
        .route(CONFIG_PATH, routing::get(client_config))
        .with_state(service)
}

impl IntoResponse for FormatError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Handle `POST {format_path}`
async fn format_content(
    State(service): State<Arc<FormatService>>,
    payload: Result<Json<FormatRequest>, JsonRejection>,
) -> Result<Response, FormatError> {
    let Json(request) = payload.map_err(|rejection| FormatError::InvalidBody(rejection.body_text()))?;

    match service.format(request).await {
        Ok(response) => Ok(Json(response).into_response()),
        Err(e) => {
            if e.is_client_error() {
                tracing::debug!(error = %e, "rejected format request");
            }
            Err(e)
        }
    }
}

/// Handle `POST /api/markdown`
async fn convert_markdown(
    payload: Result<Json<MarkdownRequest>, JsonRejection>,
) -> Result<Json<MarkdownResponse>, FormatError> {
    let Json(request) = payload.map_err(|rejection| FormatError::InvalidBody(rejection.body_text()))?;

    let content = request
        .content
        .filter(|c| !c.is_empty())
        .ok_or(FormatError::MissingContent)?;

    Ok(Json(MarkdownResponse {
        markdown: html_to_markdown(&content),
    }))
}

/// Handle `GET /api/config`
async fn client_config(State(service): State<Arc<FormatService>>) -> impl IntoResponse {
    Json(service.client_config())
}
