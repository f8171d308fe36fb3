//! Persistence service configuration

use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Longest request timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Persistence service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the persistence service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate API configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }

        // In production, require HTTPS
        if environment.is_production() && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_validation_timeout_bounds() {
        for timeout_secs in [0, 301] {
            let config = ApiConfig {
                timeout_secs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(&Environment::Development),
                Err(ValidationError::InvalidTimeout)
            );
        }
        let config = ApiConfig {
            timeout_secs: 300,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = ApiConfig {
            base_url: "ftp://svc".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = ApiConfig::default();
        // Allowed in development
        assert!(config.validate(&Environment::Staging).is_ok());
        // Rejected in production
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        );

        let secure = ApiConfig {
            base_url: "https://echo.example.com".to_string(),
            ..Default::default()
        };
        assert!(secure.validate(&Environment::Production).is_ok());
    }
}
