//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use scribe_config::{Config, FormatConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with no upstream credential
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                format: FormatConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the format proxy at a mock upstream with a test key
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.config.format.api_key = Some(SecretString::from("test-key"));
        self.config.format.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the format proxy at an upstream without configuring a key
    pub fn with_unauthenticated_upstream(mut self, base_url: &str) -> Self {
        self.config.format.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Mount the format endpoint elsewhere
    pub fn with_format_path(mut self, path: &str) -> Self {
        path.clone_into(&mut self.config.format.path);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
