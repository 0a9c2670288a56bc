#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod format;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use format::*;
pub use health::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Top-level Scribe configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Format proxy configuration
    #[serde(default)]
    pub format: FormatConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
