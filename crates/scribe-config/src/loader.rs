use std::path::Path;

use secrecy::SecretString;

use crate::{API_KEY_ENV, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes, applies environment fallbacks and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.apply_env_fallbacks();
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration from defaults and the process environment only
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_fallbacks();
        config.validate()?;
        Ok(config)
    }

    /// Fill in the API key from `OPENAI_API_KEY` when none is configured
    fn apply_env_fallbacks(&mut self) {
        if self.format.credential().is_some() {
            return;
        }

        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            tracing::debug!(var = API_KEY_ENV, "using API key from environment");
            self.format.api_key = Some(SecretString::from(key));
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if routes or the upstream URL are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_routes()?;
        self.validate_format_config()?;
        Ok(())
    }

    /// Ensure mounted routes are absolute and distinct
    fn validate_routes(&self) -> anyhow::Result<()> {
        let format_path = &self.format.path;
        if !format_path.starts_with('/') {
            anyhow::bail!("format.path must start with '/': `{format_path}`");
        }

        if self.server.health.enabled {
            let health_path = &self.server.health.path;
            if !health_path.starts_with('/') {
                anyhow::bail!("server.health.path must start with '/': `{health_path}`");
            }
            if health_path == format_path {
                anyhow::bail!("server.health.path and format.path must differ");
            }
        }

        Ok(())
    }

    /// Validate the upstream settings
    fn validate_format_config(&self) -> anyhow::Result<()> {
        if let Some(ref url) = self.format.base_url
            && !matches!(url.scheme(), "http" | "https")
        {
            anyhow::bail!("format.base_url must use http or https: `{url}`");
        }

        if self.format.models.iter().any(|m| m.trim().is_empty()) {
            anyhow::bail!("format.models must not contain empty model names");
        }

        if let Some(ref telemetry) = self.telemetry
            && !(0.0..=1.0).contains(&telemetry.sampling_rate)
        {
            anyhow::bail!("telemetry.sampling_rate must be between 0 and 1");
        }

        Ok(())
    }
}
