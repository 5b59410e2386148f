//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables, with `__`
//! separating nested keys (`ADMIN_API__BASE_URL`).

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Upstream admin API settings.
    pub admin_api: AdminApiConfig,
}

/// Where the upstream admin API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminApiConfig {
    /// Base URL, e.g. `https://api.samcast.com.br/admin`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source(
        source: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Environment::default()
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn timeout_defaults_to_ten_seconds() {
        let config =
            ServerConfig::from_source(environment(&[("ADMIN_API__BASE_URL", "http://api.local")]))
                .expect("valid config");
        assert_eq!(config.admin_api.base_url, "http://api.local");
        assert_eq!(config.admin_api.timeout_seconds, 10);
    }

    #[test]
    fn timeout_is_parsed_from_env() {
        let config = ServerConfig::from_source(environment(&[
            ("ADMIN_API__BASE_URL", "http://api.local"),
            ("ADMIN_API__TIMEOUT_SECONDS", "3"),
        ]))
        .expect("valid config");
        assert_eq!(config.admin_api.timeout_seconds, 3);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(ServerConfig::from_source(environment(&[])).is_err());
    }
}
