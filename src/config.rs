//! Configuration types for estate-luxe

use crate::valuation::EngineParams;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineParams,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Prediction endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Base URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 10,
        }
    }
}

/// Local persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON store file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("estate-luxe.store.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Default log level filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [engine]
            value_per_sqft = 225.0
            value_floor = 150000.0

            [prediction]
            base_url = "http://predict.internal:8000"
            timeout_secs = 5

            [storage]
            path = "./data/store.json"

            [telemetry]
            log_level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.engine.value_per_sqft, 225.0);
        assert_eq!(config.prediction.base_url, "http://predict.internal:8000");
        assert_eq!(config.prediction.timeout_secs, 5);
        assert_eq!(config.storage.path, PathBuf::from("./data/store.json"));
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.engine.value_per_sqft, 225.0);
        assert_eq!(config.prediction.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.storage.path, PathBuf::from("estate-luxe.store.json"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}
