//! Market insights
//!
//! Presentational market statistics: static sample data plus a daily
//! fluctuating forecast. The fluctuation comes through the injectable
//! `RandomSource` so tests can pin the sequence.

mod rng;

pub use rng::{DailyRng, FixedSource, RandomSource};

use serde::Serialize;

/// Headline market statistics (sample data)
#[derive(Debug, Clone, Serialize)]
pub struct MarketStats {
    pub average_price: i64,
    pub price_change_pct: f64,
    pub days_on_market: u32,
    pub inventory_months: f64,
    pub sales_volume: u32,
    pub price_per_sqft: i64,
}

/// Sample headline statistics
pub fn market_stats() -> MarketStats {
    MarketStats {
        average_price: 425_000,
        price_change_pct: 8.2,
        days_on_market: 24,
        inventory_months: 2.1,
        sales_volume: 156,
        price_per_sqft: 198,
    }
}

/// Neighborhood inventory level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InventoryLevel {
    Low,
    Medium,
    High,
}

/// A neighborhood summary card
#[derive(Debug, Clone, Serialize)]
pub struct Neighborhood {
    pub name: &'static str,
    pub average_price: i64,
    pub growth_pct: f64,
    pub inventory: InventoryLevel,
    pub rating: u8,
    pub features: &'static [&'static str],
}

/// Sample neighborhood data
pub fn neighborhoods() -> Vec<Neighborhood> {
    vec![
        Neighborhood {
            name: "Downtown District",
            average_price: 520_000,
            growth_pct: 12.5,
            inventory: InventoryLevel::Low,
            rating: 95,
            features: &["Urban amenities", "Public transit", "Entertainment"],
        },
        Neighborhood {
            name: "Riverside Heights",
            average_price: 485_000,
            growth_pct: 9.8,
            inventory: InventoryLevel::Medium,
            rating: 88,
            features: &["Waterfront", "Parks", "Family-friendly"],
        },
        Neighborhood {
            name: "Historic Village",
            average_price: 395_000,
            growth_pct: 6.4,
            inventory: InventoryLevel::High,
            rating: 82,
            features: &["Character homes", "Local shops", "Community feel"],
        },
    ]
}

/// A factor weighing on the market, with its impact score
#[derive(Debug, Clone, Serialize)]
pub struct MarketFactor {
    pub name: &'static str,
    pub impact: u8,
    pub positive: bool,
}

/// Sample market factors
pub fn market_factors() -> Vec<MarketFactor> {
    vec![
        MarketFactor { name: "School Quality", impact: 92, positive: true },
        MarketFactor { name: "Transportation Access", impact: 85, positive: true },
        MarketFactor { name: "Employment Growth", impact: 78, positive: true },
        MarketFactor { name: "Interest Rates", impact: 65, positive: false },
        MarketFactor { name: "Housing Supply", impact: 58, positive: false },
    ]
}

/// Market trend per trailing timeframe (sample data)
#[derive(Debug, Clone, Serialize)]
pub struct TimeframeTrend {
    pub timeframe: &'static str,
    pub change_pct: f64,
    pub price: i64,
}

/// Sample trailing trends
pub fn timeframe_trends() -> Vec<TimeframeTrend> {
    vec![
        TimeframeTrend { timeframe: "1year", change_pct: 8.5, price: 485_000 },
        TimeframeTrend { timeframe: "3years", change_pct: 22.3, price: 520_000 },
        TimeframeTrend { timeframe: "5years", change_pct: 18.7, price: 495_000 },
    ]
}

/// A recently sold comparable (sample data)
#[derive(Debug, Clone, Serialize)]
pub struct ComparableProperty {
    pub address: &'static str,
    pub price: i64,
    pub sqft: u32,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub sold_date: &'static str,
}

/// Sample comparable sales
pub fn comparable_properties() -> Vec<ComparableProperty> {
    vec![
        ComparableProperty {
            address: "125 Oak Street",
            price: 475_000,
            sqft: 2100,
            bedrooms: 3.0,
            bathrooms: 2.0,
            sold_date: "Dec 2023",
        },
        ComparableProperty {
            address: "118 Maple Avenue",
            price: 492_000,
            sqft: 2200,
            bedrooms: 3.0,
            bathrooms: 2.5,
            sold_date: "Nov 2023",
        },
        ComparableProperty {
            address: "134 Pine Street",
            price: 468_000,
            sqft: 2050,
            bedrooms: 3.0,
            bathrooms: 2.0,
            sold_date: "Jan 2024",
        },
    ]
}

/// One labelled forecast entry
#[derive(Debug, Clone, Serialize)]
pub struct ForecastEntry {
    pub label: &'static str,
    pub value_pct: f64,
}

/// Build the fluctuating market forecast. Each entry draws from its own
/// realistic range and is rounded to one decimal place.
pub fn market_forecast<R: RandomSource>(rng: &mut R) -> Vec<ForecastEntry> {
    let ranges: [(&'static str, f64, f64); 3] = [
        ("Q2 2025", 1.6, 3.6),
        ("Q3 2026", 0.8, 3.0),
        ("Q4 2027", -0.5, 2.0),
    ];
    ranges
        .into_iter()
        .map(|(label, min, max)| ForecastEntry {
            label,
            value_pct: (rng.between(min, max) * 10.0).round() / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_with_fixed_sequence() {
        let mut rng = FixedSource::new(vec![0.0, 0.5, 1.0 - 1e-9]);
        let forecast = market_forecast(&mut rng);
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].value_pct, 1.6);
        assert_eq!(forecast[1].value_pct, 1.9);
        assert_eq!(forecast[2].value_pct, 2.0);
    }

    #[test]
    fn test_forecast_daily_determinism() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 23).unwrap();
        let a = market_forecast(&mut DailyRng::for_date(date));
        let b = market_forecast(&mut DailyRng::for_date(date));
        assert_eq!(a[0].value_pct, b[0].value_pct);
        assert_eq!(a[1].value_pct, b[1].value_pct);
        assert_eq!(a[2].value_pct, b[2].value_pct);
    }

    #[test]
    fn test_forecast_within_ranges() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let forecast = market_forecast(&mut DailyRng::for_date(date));
        assert!((1.6..=3.6).contains(&forecast[0].value_pct));
        assert!((0.8..=3.0).contains(&forecast[1].value_pct));
        assert!((-0.5..=2.0).contains(&forecast[2].value_pct));
    }

    #[test]
    fn test_sample_data_shapes() {
        assert_eq!(neighborhoods().len(), 3);
        assert_eq!(market_factors().len(), 5);
        assert_eq!(timeframe_trends().len(), 3);
        assert_eq!(comparable_properties().len(), 3);
        assert_eq!(market_stats().average_price, 425_000);
    }
}
