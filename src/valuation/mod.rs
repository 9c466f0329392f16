//! Valuation engine
//!
//! Pure functions turning property attributes and a country selection into
//! price estimates, pricing bands, historical series, and projections.
//! Everything here is deterministic for a given calendar year.

mod history;
mod pricing;
mod projection;

pub use history::{price_history, HistoricalPoint, HISTORY_YEARS};
pub use pricing::{suggested_pricing, PricingBand};
pub use projection::{project, Horizon, Projection, ProjectionError, Scenario};

use serde::{Deserialize, Serialize};

/// Attributes of the property being valued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAttributes {
    /// Interior area in square feet
    pub square_footage: f64,
    /// Bedroom count
    pub bedrooms: f64,
    /// Bathroom count (half baths allowed)
    pub bathrooms: f64,
    /// Construction year
    pub year_built: i32,
    /// Street address, for display only
    pub address: Option<String>,
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self {
            square_footage: 2150.0,
            bedrooms: 3.0,
            bathrooms: 2.5,
            year_built: 2015,
            address: None,
        }
    }
}

impl PropertyAttributes {
    /// Build attributes from possibly-absent form fields, substituting the
    /// documented defaults for anything missing.
    pub fn from_partial(
        square_footage: Option<f64>,
        bedrooms: Option<f64>,
        bathrooms: Option<f64>,
        year_built: Option<i32>,
        address: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            square_footage: square_footage.unwrap_or(defaults.square_footage),
            bedrooms: bedrooms.unwrap_or(defaults.bedrooms),
            bathrooms: bathrooms.unwrap_or(defaults.bathrooms),
            year_built: year_built.unwrap_or(defaults.year_built),
            address,
        }
    }
}

/// Tunable constants for the current-value estimator
#[derive(Debug, Clone, Deserialize)]
pub struct EngineParams {
    /// Base value per square foot
    #[serde(default = "default_value_per_sqft")]
    pub value_per_sqft: f64,
    /// Adjustment per bedroom away from 3
    #[serde(default = "default_bedroom_adjustment")]
    pub bedroom_adjustment: f64,
    /// Adjustment per bathroom away from 2.5
    #[serde(default = "default_bathroom_adjustment")]
    pub bathroom_adjustment: f64,
    /// Depreciation per year of age
    #[serde(default = "default_age_depreciation")]
    pub age_depreciation: f64,
    /// Minimum current value
    #[serde(default = "default_value_floor")]
    pub value_floor: f64,
}

fn default_value_per_sqft() -> f64 {
    225.0
}
fn default_bedroom_adjustment() -> f64 {
    10_000.0
}
fn default_bathroom_adjustment() -> f64 {
    12_000.0
}
fn default_age_depreciation() -> f64 {
    500.0
}
fn default_value_floor() -> f64 {
    150_000.0
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            value_per_sqft: 225.0,
            bedroom_adjustment: 10_000.0,
            bathroom_adjustment: 12_000.0,
            age_depreciation: 500.0,
            value_floor: 150_000.0,
        }
    }
}

/// Computed valuation for a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationEstimate {
    /// Estimated current value, engine base units
    pub current_value: i64,
    /// Lower bound of the estimate range (-4%)
    pub price_range_low: i64,
    /// Upper bound of the estimate range (+4%)
    pub price_range_high: i64,
    /// Constant confidence score; a known simplification
    pub confidence_score: u8,
}

/// Floor applied wherever compounding could drive a series value
/// arbitrarily low.
pub const SERIES_FLOOR: f64 = 50_000.0;

/// Constant confidence reported with every estimate.
pub const CONFIDENCE_SCORE: u8 = 90;

/// Estimate the current value and range for a property.
///
/// `as_of_year` is the current calendar year; callers pass
/// `Utc::now().year()`. Age never goes negative for homes "built" in the
/// future.
pub fn estimate(attrs: &PropertyAttributes, params: &EngineParams, as_of_year: i32) -> ValuationEstimate {
    let age_years = (as_of_year - attrs.year_built).max(0) as f64;
    let raw = attrs.square_footage * params.value_per_sqft
        + (attrs.bedrooms - 3.0) * params.bedroom_adjustment
        + (attrs.bathrooms - 2.5) * params.bathroom_adjustment
        - age_years * params.age_depreciation;
    let current_value = raw.max(params.value_floor).round() as i64;

    ValuationEstimate {
        current_value,
        price_range_low: (current_value as f64 * 0.96).round() as i64,
        price_range_high: (current_value as f64 * 1.04).round() as i64,
        confidence_score: CONFIDENCE_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let attrs = PropertyAttributes {
            square_footage: 1710.0,
            bedrooms: 3.0,
            bathrooms: 2.0,
            year_built: 2003,
            address: None,
        };
        let est = estimate(&attrs, &EngineParams::default(), 2024);
        assert_eq!(est.current_value, 368_250);
        assert_eq!(est.price_range_low, 353_520);
        assert_eq!(est.price_range_high, 382_980);
        assert_eq!(est.confidence_score, 90);
    }

    #[test]
    fn test_defaults_applied_when_absent() {
        let attrs = PropertyAttributes::from_partial(None, None, None, None, None);
        assert_eq!(attrs.square_footage, 2150.0);
        assert_eq!(attrs.bedrooms, 3.0);
        assert_eq!(attrs.bathrooms, 2.5);
        assert_eq!(attrs.year_built, 2015);
    }

    #[test]
    fn test_floor_for_tiny_old_property() {
        let attrs = PropertyAttributes {
            square_footage: 200.0,
            bedrooms: 0.0,
            bathrooms: 0.0,
            year_built: 1900,
            address: None,
        };
        let est = estimate(&attrs, &EngineParams::default(), 2024);
        assert_eq!(est.current_value, 150_000);
    }

    #[test]
    fn test_future_year_built_has_no_negative_age() {
        let mut attrs = PropertyAttributes::default();
        attrs.year_built = 2030;
        let est = estimate(&attrs, &EngineParams::default(), 2024);
        // 2150 * 225, no bed/bath adjustment, no depreciation
        assert_eq!(est.current_value, 483_750);
    }

    #[test]
    fn test_range_is_exactly_four_percent() {
        for sqft in [600.0, 1710.0, 2150.0, 9000.0] {
            let attrs = PropertyAttributes {
                square_footage: sqft,
                ..Default::default()
            };
            let est = estimate(&attrs, &EngineParams::default(), 2024);
            assert_eq!(
                est.price_range_low,
                (est.current_value as f64 * 0.96).round() as i64
            );
            assert_eq!(
                est.price_range_high,
                (est.current_value as f64 * 1.04).round() as i64
            );
        }
    }

    #[test]
    fn test_engine_params_deserialize_with_defaults() {
        let params: EngineParams = toml::from_str("").unwrap();
        assert_eq!(params.value_per_sqft, 225.0);
        assert_eq!(params.value_floor, 150_000.0);

        let params: EngineParams = toml::from_str("value_per_sqft = 300.0").unwrap();
        assert_eq!(params.value_per_sqft, 300.0);
        assert_eq!(params.bedroom_adjustment, 10_000.0);
    }
}
