//! HTTP client for the prediction endpoint

use super::{ErrorResponse, PredictRequest, PredictResponse, PredictionApi, PredictionError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default endpoint base URL (local demo backend)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the prediction client
#[derive(Debug, Clone)]
pub struct PredictionClientConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PredictionClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the price-prediction service
pub struct PredictionClient {
    config: PredictionClientConfig,
    client: Client,
}

impl PredictionClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(PredictionClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: PredictionClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Check the service health endpoint
    pub async fn health(&self) -> Result<bool, PredictionError> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(false);
        }

        #[derive(serde::Deserialize)]
        struct Health {
            ok: bool,
        }
        let health: Health = response.json().await?;
        Ok(health.ok)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, features: &BTreeMap<String, f64>) -> Result<f64, PredictionError> {
        let url = format!("{}/predict", self.config.base_url);
        let body = PredictRequest {
            features_by_name: features.clone(),
        };

        tracing::debug!(url = %url, feature_count = features.len(), "Requesting prediction");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorResponse>().await {
                Ok(err) => err.detail,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Prediction failed")
                    .to_string(),
            };
            return Err(PredictionError::Endpoint {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: PredictResponse = response.json().await?;
        tracing::debug!(prediction = parsed.prediction, "Prediction received");
        Ok(parsed.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PredictionClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_creation() {
        let _client = PredictionClient::new();
        let _custom = PredictionClient::with_config(PredictionClientConfig {
            base_url: "http://prediction.internal:9000".to_string(),
            timeout: Duration::from_secs(3),
        });
    }
}
