//! Historical price series
//!
//! Synthesizes a trailing 15-year series anchored at the current value.
//! The fluctuation is a sine wobble keyed on the country ordinal: smooth,
//! deterministic, and seed-free, so different countries do not produce
//! identical curves.

use super::SERIES_FLOOR;
use crate::country::CountryCode;
use serde::Serialize;

/// Trailing window length, inclusive of the current year
pub const HISTORY_YEARS: usize = 15;

/// One year of the historical series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub year: i32,
    pub value: i64,
}

/// Generate the trailing price history for `[as_of_year - 14, as_of_year]`.
///
/// The base value 14 periods prior is back-computed from the current value
/// so the series compounds forward onto the anchor without drift.
pub fn price_history(
    current_value: i64,
    country: CountryCode,
    as_of_year: i32,
) -> Vec<HistoricalPoint> {
    let profile = country.profile();
    let g = profile.base_growth;
    let vol = profile.volatility;
    let ordinal = country.wobble_ordinal();
    let periods = (HISTORY_YEARS - 1) as i32;
    let base = current_value as f64 / (1.0 + g).powi(periods);

    (0..HISTORY_YEARS)
        .map(|t| {
            let wobble = ((t as f64 + ordinal) * 1.3).sin() * vol;
            let value = base * (1.0 + g).powi(t as i32) * (1.0 + wobble * 0.4);
            HistoricalPoint {
                year: as_of_year - periods + t as i32,
                value: value.max(SERIES_FLOOR).round() as i64,
            }
        })
        .collect()
}
