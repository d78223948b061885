//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    /// External support link; the support action is hidden when absent.
    #[serde(default)]
    pub support_url: Option<String>,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://api.numerolog.app`.
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per request (1 = no retry).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: default_timeout_secs(),
                max_attempts: default_max_attempts(),
            },
            support_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api":{"base_url":"https://api.example"}}"#).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.max_attempts, 1);
        assert!(config.support_url.is_none());
    }
}
