//! External prediction boundary
//!
//! Thin client for the remote price-prediction endpoint. Single attempt per
//! call, no retry, no caching; failures surface the server-provided detail
//! message when present.

mod client;

pub use client::{PredictionClient, PredictionClientConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Request body for POST /predict
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// Raw named numeric features; the endpoint tolerates missing columns
    pub features_by_name: BTreeMap<String, f64>,
}

/// Success body from POST /predict
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}

/// Error body accompanying a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub detail: String,
}

/// Prediction request failures
#[derive(Debug, Error)]
pub enum PredictionError {
    /// Endpoint unreachable or transport failure
    #[error("prediction request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status
    #[error("prediction endpoint error ({status}): {detail}")]
    Endpoint { status: u16, detail: String },
}

/// The handful of features the demo form collects, by their canonical
/// endpoint column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictFeatures {
    /// Overall material and finish quality, 1-10
    pub overall_quality: f64,
    /// Construction year
    pub year_built: f64,
    /// Above-grade living area, sqft
    pub living_area: f64,
    /// Garage capacity in cars
    pub garage_capacity: f64,
    /// Full bathrooms above grade
    pub full_baths: f64,
    /// Total basement area, sqft
    pub basement_area: f64,
}

impl Default for PredictFeatures {
    fn default() -> Self {
        Self {
            overall_quality: 7.0,
            year_built: 2003.0,
            living_area: 1710.0,
            garage_capacity: 2.0,
            full_baths: 2.0,
            basement_area: 856.0,
        }
    }
}

impl PredictFeatures {
    /// Map to the endpoint's raw column names
    pub fn to_feature_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("OverallQual".to_string(), self.overall_quality),
            ("YearBuilt".to_string(), self.year_built),
            ("GrLivArea".to_string(), self.living_area),
            ("GarageCars".to_string(), self.garage_capacity),
            ("FullBath".to_string(), self.full_baths),
            ("TotalBsmtSF".to_string(), self.basement_area),
        ])
    }
}

/// Trait for prediction API implementations
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Request a scalar price estimate for the given named features
    async fn predict(&self, features: &BTreeMap<String, f64>) -> Result<f64, PredictionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = PredictRequest {
            features_by_name: PredictFeatures::default().to_feature_map(),
        };
        let json = serde_json::to_value(&req).unwrap();
        let features = &json["features_by_name"];
        assert_eq!(features["OverallQual"], 7.0);
        assert_eq!(features["GrLivArea"], 1710.0);
        assert_eq!(features["TotalBsmtSF"], 856.0);
    }

    #[test]
    fn test_response_parses() {
        let resp: PredictResponse = serde_json::from_str(r#"{"prediction": 208500.0}"#).unwrap();
        assert_eq!(resp.prediction, 208_500.0);
    }

    #[test]
    fn test_error_detail_parses() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Model prediction failed"}"#).unwrap();
        assert_eq!(err.detail, "Model prediction failed");
    }

    #[test]
    fn test_endpoint_error_display() {
        let err = PredictionError::Endpoint {
            status: 500,
            detail: "Model prediction failed: ValueError".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Model prediction failed"));
    }
}
