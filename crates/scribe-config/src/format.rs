use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Default upstream chat-completion API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Format proxy configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Route the format endpoint is mounted at
    #[serde(default = "default_path")]
    pub path: String,
    /// API key for the upstream; falls back to `OPENAI_API_KEY` when unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for OpenAI-compatible upstreams
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Models offered to the client configuration dialog
    #[serde(default = "default_models")]
    pub models: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            api_key: None,
            base_url: None,
            models: default_models(),
        }
    }
}

impl FormatConfig {
    /// The configured API key, treating an empty value as absent
    pub fn credential(&self) -> Option<&SecretString> {
        self.api_key.as_ref().filter(|key| !key.expose_secret().is_empty())
    }
}

fn default_path() -> String {
    "/api/format".to_string()
}

fn default_models() -> Vec<String> {
    vec!["gpt-4".to_string(), "gpt-3.5-turbo".to_string()]
}
