#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::fetch::POETRYDB_RANDOM_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::time::Duration;

pub const MIN_TIMEOUT_SECONDS: u64 = 1;
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// The resolved configuration the binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: POETRYDB_RANDOM_ENDPOINT.to_string(),
            timeout_seconds: None,
            verbose: false,
            log_format: LogFormat::default(),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    // URL 格式交給 PoemFetcher 檢查
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("source.endpoint", &self.endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range(
                "source.timeout_seconds",
                timeout,
                MIN_TIMEOUT_SECONDS,
                MAX_TIMEOUT_SECONDS,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();

        assert_eq!(config.endpoint(), "https://poetrydb.org/random/1");
        assert_eq!(config.timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_endpoint_is_invalid() {
        let config = AppConfig {
            endpoint: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = AppConfig {
            timeout_seconds: Some(0),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_endpoint_passes_validation() {
        let config = AppConfig {
            endpoint: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
