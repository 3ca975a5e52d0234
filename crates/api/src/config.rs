//! Service Configuration
//!
//! Defaults merged with an optional `risk-service.toml` file and
//! `RISK_SERVICE_*` environment overrides.

use crate::rate_limit::RateLimitConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Path of the SQLite database file, created on first startup
    pub database_path: String,
    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_path: "risks.db".to_string(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file and environment, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("risk-service").required(false))
            .add_source(Environment::with_prefix("RISK_SERVICE").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.database_path, "risks.db");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ServiceConfig::load().unwrap();
        assert_eq!(config.database_path, "risks.db");
    }
}
