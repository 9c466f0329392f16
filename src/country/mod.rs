//! Country/currency profiles
//!
//! Maps a country code to its currency, locale, static USD exchange rate,
//! and the market constants the valuation engine uses (growth, volatility,
//! luxury multipliers, per-square-foot guidance).

mod profiles;

pub use profiles::{CountryProfile, GuidanceBand, LuxuryBand};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported market country codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CountryCode {
    /// India
    #[default]
    #[serde(rename = "IN")]
    In,
    /// United States
    #[serde(rename = "US")]
    Us,
    /// Euro area
    #[serde(rename = "EU")]
    Eu,
    /// United Kingdom
    #[serde(rename = "UK")]
    Uk,
    /// United Arab Emirates
    #[serde(rename = "AE")]
    Ae,
}

/// Error parsing a country code string
#[derive(Debug, Error)]
#[error("unknown country code: {0} (expected IN, US, EU, UK, or AE)")]
pub struct ParseCountryError(String);

impl CountryCode {
    /// All supported codes, in display order
    pub const ALL: [CountryCode; 5] = [
        CountryCode::In,
        CountryCode::Us,
        CountryCode::Eu,
        CountryCode::Uk,
        CountryCode::Ae,
    ];

    /// Two-letter code as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::In => "IN",
            CountryCode::Us => "US",
            CountryCode::Eu => "EU",
            CountryCode::Uk => "UK",
            CountryCode::Ae => "AE",
        }
    }

    /// Market profile for this country
    pub fn profile(&self) -> &'static CountryProfile {
        profiles::profile(*self)
    }

    /// Seed ordinal for the history wobble: ASCII code of the first letter
    /// of the two-letter code. US and UK intentionally share an ordinal;
    /// their curves still differ through growth and volatility.
    pub fn wobble_ordinal(&self) -> f64 {
        self.as_str().as_bytes()[0] as f64
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ParseCountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IN" => Ok(CountryCode::In),
            "US" => Ok(CountryCode::Us),
            "EU" => Ok(CountryCode::Eu),
            "UK" => Ok(CountryCode::Uk),
            "AE" => Ok(CountryCode::Ae),
            other => Err(ParseCountryError(other.to_string())),
        }
    }
}

/// Convert a USD amount into the country's currency using the static
/// snapshot rate. In production this would pull from an FX API.
pub fn convert_usd(amount_usd: Decimal, country: CountryCode) -> Decimal {
    amount_usd * country.profile().usd_rate
}

/// Format an amount in the country's currency: currency code plus the
/// rounded amount with locale-correct digit grouping (Indian 2-2-3
/// grouping for en-IN, Western 3-3-3 otherwise). No fraction digits.
pub fn format_currency(amount: f64, country: CountryCode) -> String {
    let profile = country.profile();
    let rounded = amount.round() as i64;
    let grouped = group_digits(rounded.unsigned_abs(), profile.locale == "en-IN");
    if rounded < 0 {
        format!("{} -{}", profile.currency, grouped)
    } else {
        format!("{} {}", profile.currency, grouped)
    }
}

fn group_digits(value: u64, indian: bool) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let n = bytes.len();
    let mut out = String::with_capacity(n + n / 2);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            let remaining = n - i;
            let boundary = if indian {
                // en-IN groups the last three digits, then pairs
                remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)
            } else {
                remaining % 3 == 0
            };
            if boundary {
                out.push(',');
            }
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_country_codes() {
        assert_eq!("IN".parse::<CountryCode>().unwrap(), CountryCode::In);
        assert_eq!("us".parse::<CountryCode>().unwrap(), CountryCode::Us);
        assert_eq!("AE".parse::<CountryCode>().unwrap(), CountryCode::Ae);
        assert!("XX".parse::<CountryCode>().is_err());
    }

    #[test]
    fn test_default_country_is_india() {
        assert_eq!(CountryCode::default(), CountryCode::In);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&CountryCode::Uk).unwrap();
        assert_eq!(json, "\"UK\"");
        let back: CountryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CountryCode::Uk);
    }

    #[test]
    fn test_convert_usd_in() {
        assert_eq!(convert_usd(dec!(100), CountryCode::In), dec!(8400));
        assert_eq!(convert_usd(dec!(100), CountryCode::Us), dec!(100));
        assert_eq!(convert_usd(dec!(100), CountryCode::Ae), dec!(367.00));
    }

    #[test]
    fn test_format_currency_western_grouping() {
        assert_eq!(format_currency(485000.0, CountryCode::Us), "USD 485,000");
        assert_eq!(format_currency(1234567.4, CountryCode::Uk), "GBP 1,234,567");
        assert_eq!(format_currency(999.0, CountryCode::Eu), "EUR 999");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(1234567.0, CountryCode::In), "INR 12,34,567");
        assert_eq!(format_currency(123456.0, CountryCode::In), "INR 1,23,456");
        assert_eq!(format_currency(1234.0, CountryCode::In), "INR 1,234");
        assert_eq!(format_currency(123.0, CountryCode::In), "INR 123");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-4500.0, CountryCode::Us), "USD -4,500");
    }

    #[test]
    fn test_wobble_ordinal_matches_first_letter() {
        assert_eq!(CountryCode::In.wobble_ordinal(), 73.0);
        assert_eq!(CountryCode::Us.wobble_ordinal(), 85.0);
        assert_eq!(CountryCode::Uk.wobble_ordinal(), 85.0);
        assert_eq!(CountryCode::Ae.wobble_ordinal(), 65.0);
    }
}
