use http::StatusCode;
use thiserror::Error;

/// Errors returned by the format proxy
///
/// Each variant renders to the caller as `{"error": <message>}` with the
/// status from [`FormatError::status_code`].
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// Request body was not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// `content` was absent or empty
    #[error("Content is required")]
    MissingContent,

    /// `temperature` outside `[0, 1]` or not finite
    #[error("Temperature must be between 0 and 1")]
    InvalidTemperature(f64),

    /// No upstream credential is configured
    #[error("AI service not configured.")]
    NotConfigured,

    /// Upstream call failed or answered with an error
    #[error("{0}")]
    Upstream(String),

    /// Upstream succeeded but produced no text
    #[error("No content received from OpenAI")]
    EmptyCompletion,
}

impl FormatError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::MissingContent | Self::InvalidTemperature(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) | Self::EmptyCompletion => StatusCode::BAD_GATEWAY,
        }
    }

    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
