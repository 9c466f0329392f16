//! Static country profile tables
//!
//! Illustrative constants: growth/volatility/guidance figures are demo
//! configuration data, not derived from market feeds.

use super::CountryCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Luxury-over-average multiplier band
#[derive(Debug, Clone, Copy)]
pub struct LuxuryBand {
    pub low: f64,
    pub high: f64,
}

/// Reference price-per-square-foot band in local currency
#[derive(Debug, Clone, Copy)]
pub struct GuidanceBand {
    pub low: f64,
    pub high: f64,
}

/// Market profile for a country
#[derive(Debug, Clone)]
pub struct CountryProfile {
    /// ISO currency code
    pub currency: &'static str,
    /// Display locale
    pub locale: &'static str,
    /// Static USD exchange rate snapshot
    pub usd_rate: Decimal,
    /// Base annual growth rate
    pub base_growth: f64,
    /// Historical volatility factor
    pub volatility: f64,
    /// Local demand lift applied to the luxury band
    pub lift: f64,
    /// Luxury-over-average multipliers
    pub luxury: LuxuryBand,
    /// Per-square-foot guidance in local currency, when declared
    pub guidance_per_sqft: Option<GuidanceBand>,
}

static IN: CountryProfile = CountryProfile {
    currency: "INR",
    locale: "en-IN",
    usd_rate: dec!(84),
    base_growth: 0.055,
    volatility: 0.10,
    lift: 0.06,
    luxury: LuxuryBand { low: 1.6, high: 2.4 },
    guidance_per_sqft: Some(GuidanceBand { low: 2500.0, high: 4000.0 }),
};

static US: CountryProfile = CountryProfile {
    currency: "USD",
    locale: "en-US",
    usd_rate: dec!(1),
    base_growth: 0.035,
    volatility: 0.06,
    lift: 0.04,
    luxury: LuxuryBand { low: 1.3, high: 1.8 },
    guidance_per_sqft: Some(GuidanceBand { low: 220.0, high: 320.0 }),
};

static EU: CountryProfile = CountryProfile {
    currency: "EUR",
    locale: "de-DE",
    usd_rate: dec!(0.93),
    base_growth: 0.025,
    volatility: 0.05,
    lift: 0.03,
    luxury: LuxuryBand { low: 1.4, high: 2.0 },
    guidance_per_sqft: Some(GuidanceBand { low: 700.0, high: 900.0 }),
};

static UK: CountryProfile = CountryProfile {
    currency: "GBP",
    locale: "en-GB",
    usd_rate: dec!(0.78),
    base_growth: 0.022,
    volatility: 0.05,
    lift: 0.03,
    luxury: LuxuryBand { low: 1.5, high: 2.2 },
    guidance_per_sqft: Some(GuidanceBand { low: 700.0, high: 700.0 }),
};

static AE: CountryProfile = CountryProfile {
    currency: "AED",
    locale: "en-AE",
    usd_rate: dec!(3.67),
    base_growth: 0.045,
    volatility: 0.08,
    lift: 0.08,
    luxury: LuxuryBand { low: 1.6, high: 2.5 },
    guidance_per_sqft: Some(GuidanceBand { low: 550.0, high: 600.0 }),
};

pub(super) fn profile(code: CountryCode) -> &'static CountryProfile {
    match code {
        CountryCode::In => &IN,
        CountryCode::Us => &US,
        CountryCode::Eu => &EU,
        CountryCode::Uk => &UK,
        CountryCode::Ae => &AE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_currencies() {
        assert_eq!(CountryCode::In.profile().currency, "INR");
        assert_eq!(CountryCode::Us.profile().currency, "USD");
        assert_eq!(CountryCode::Eu.profile().currency, "EUR");
        assert_eq!(CountryCode::Uk.profile().currency, "GBP");
        assert_eq!(CountryCode::Ae.profile().currency, "AED");
    }

    #[test]
    fn test_luxury_band_ordered() {
        for code in CountryCode::ALL {
            let lux = &code.profile().luxury;
            assert!(lux.low < lux.high);
            assert!(lux.low > 1.0, "luxury must dominate average for {code}");
        }
    }

    #[test]
    fn test_guidance_bands_ordered() {
        for code in CountryCode::ALL {
            if let Some(g) = &code.profile().guidance_per_sqft {
                assert!(g.low <= g.high);
                assert!(g.low > 0.0);
            }
        }
    }

    #[test]
    fn test_growth_and_volatility_positive() {
        for code in CountryCode::ALL {
            let p = code.profile();
            assert!(p.base_growth > 0.0 && p.base_growth < 0.10);
            assert!(p.volatility > 0.0 && p.volatility < 0.20);
        }
    }
}
