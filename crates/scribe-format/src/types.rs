//! Request and response bodies exchanged with the editor

use serde::{Deserialize, Serialize};

/// Body of a format request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequest {
    /// HTML to reformat; required and non-empty
    #[serde(default)]
    pub content: Option<String>,
    /// Instruction to the model
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Upstream model identifier
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature in `[0, 1]`
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl FormatRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// Body of a successful format response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResponse {
    pub formatted_content: String,
}

/// Body of any failed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a markdown conversion request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkdownRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of a markdown conversion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownResponse {
    pub markdown: String,
}

/// Settings the editor's configuration dialog needs when it opens
///
/// Reports whether a credential exists but never the credential itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub default_model: String,
    pub default_temperature: f64,
    pub default_system_prompt: String,
    pub models: Vec<String>,
    pub configured: bool,
}
