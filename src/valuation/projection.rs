//! Forward price projections
//!
//! Compounds the current value forward under a country growth rate and a
//! scenario modifier, with summary metrics (CAGR, total change).

use super::SERIES_FLOOR;
use crate::country::CountryCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Forecast variant applied to the base growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimistic,
    #[default]
    Base,
    Optimistic,
}

impl Scenario {
    /// Signed adjustment to the base growth rate
    pub fn growth_delta(&self) -> f64 {
        match self {
            Scenario::Pessimistic => -0.01,
            Scenario::Base => 0.0,
            Scenario::Optimistic => 0.01,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scenario::Pessimistic => "pessimistic",
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
        };
        f.write_str(s)
    }
}

impl FromStr for Scenario {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pessimistic" => Ok(Scenario::Pessimistic),
            "base" => Ok(Scenario::Base),
            "optimistic" => Ok(Scenario::Optimistic),
            other => Err(ProjectionError::UnknownScenario(other.to_string())),
        }
    }
}

/// Supported projection horizons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    Ten,
    Fifteen,
    Twenty,
}

impl Horizon {
    /// Validate a year count. Anything outside {10, 15, 20} is a caller
    /// contract violation and is rejected rather than clamped.
    pub fn new(years: u32) -> Result<Self, ProjectionError> {
        match years {
            10 => Ok(Horizon::Ten),
            15 => Ok(Horizon::Fifteen),
            20 => Ok(Horizon::Twenty),
            other => Err(ProjectionError::UnsupportedHorizon(other)),
        }
    }

    pub fn years(&self) -> u32 {
        match self {
            Horizon::Ten => 10,
            Horizon::Fifteen => 15,
            Horizon::Twenty => 20,
        }
    }
}

/// Projection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("unsupported projection horizon: {0} (expected 10, 15, or 20)")]
    UnsupportedHorizon(u32),

    #[error("unknown scenario: {0} (expected pessimistic, base, or optimistic)")]
    UnknownScenario(String),
}

/// A computed forward projection
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    /// (year, value) pairs from the start year through the horizon
    pub points: Vec<(i32, i64)>,
    /// Effective annual growth rate after the scenario adjustment
    pub growth_rate: f64,
    /// Compound annual growth rate, percent
    pub cagr_pct: f64,
    /// Total change from start to end, percent
    pub total_change_pct: f64,
}

impl Projection {
    pub fn ending_value(&self) -> i64 {
        self.points.last().map(|(_, v)| *v).unwrap_or(0)
    }
}

/// Project a current value forward under the country's growth rate and the
/// scenario modifier.
pub fn project(
    current_value: i64,
    country: CountryCode,
    scenario: Scenario,
    horizon: Horizon,
    start_year: i32,
) -> Projection {
    let g = country.profile().base_growth + scenario.growth_delta();
    let years = horizon.years();
    let start = current_value as f64;

    let points: Vec<(i32, i64)> = (0..=years)
        .map(|i| {
            let value = (start * (1.0 + g).powi(i as i32)).max(SERIES_FLOOR).round() as i64;
            (start_year + i as i32, value)
        })
        .collect();

    let end = points.last().map(|(_, v)| *v as f64).unwrap_or(start);
    let cagr_pct = ((end / start).powf(1.0 / years as f64) - 1.0) * 100.0;
    let total_change_pct = (end - start) / start * 100.0;

    Projection {
        points,
        growth_rate: g,
        cagr_pct,
        total_change_pct,
    }
}
