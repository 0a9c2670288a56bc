use std::time::Duration;

use serde::Deserialize;

/// CORS configuration for the browser editor
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    #[serde(default = "wildcard")]
    pub origins: Vec<String>,
    /// Allowed request headers; `["*"]` allows any
    #[serde(default = "wildcard")]
    pub headers: Vec<String>,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: wildcard(),
            headers: wildcard(),
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Whether any origin is allowed
    pub fn any_origin(&self) -> bool {
        is_wildcard(&self.origins)
    }

    /// Whether any request header is allowed
    pub fn any_header(&self) -> bool {
        is_wildcard(&self.headers)
    }

    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}
