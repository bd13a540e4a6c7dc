use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::client::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Client configuration, baked in at compile time.
///
/// The browser has no process environment, so values are read from the
/// build environment with `option_env!`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the health records API, without a trailing slash
    pub api_url: String,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("HEALTH_API_URL"), option_env!("HEALTH_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = match log_level {
            Some(level) => Level::from_str(level.trim()).map_err(|e| ConfigError::InvalidEnvValue {
                var: "HEALTH_LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self { api_url, log_level })
    }

    /// Join an endpoint path onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests defaults when nothing is set at build time.
    ///
    /// Expected: default API URL and INFO level
    #[test]
    fn uses_defaults_when_unset() {
        let config = ClientConfig::from_values(None, None).unwrap();

        assert_eq!(config, ClientConfig::default());
    }

    /// Tests trailing slash normalization of the API URL.
    ///
    /// Expected: endpoint joins with exactly one slash
    #[test]
    fn strips_trailing_slash() {
        let config = ClientConfig::from_values(Some("https://health.example/api/"), None).unwrap();

        assert_eq!(config.api_url, "https://health.example/api");
        assert_eq!(
            config.endpoint("/users/login/"),
            "https://health.example/api/users/login/"
        );
    }

    /// Tests that an unknown log level is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvValue)
    #[test]
    fn rejects_invalid_log_level() {
        let result = ClientConfig::from_values(None, Some("loud"));

        assert!(matches!(result, Err(ConfigError::InvalidEnvValue { .. })));
    }

    /// Tests parsing of a valid log level.
    ///
    /// Expected: Level::DEBUG
    #[test]
    fn parses_log_level() {
        let config = ClientConfig::from_values(None, Some("debug")).unwrap();

        assert_eq!(config.log_level, Level::DEBUG);
    }
}
