//! `insights` subcommand: market insights for a country

use crate::country::{convert_usd, format_currency, CountryCode};
use crate::insights::{
    comparable_properties, market_factors, market_forecast, market_stats, neighborhoods, DailyRng,
};
use crate::store::{self, KeyValueStore};
use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Market country (IN, US, EU, UK, AE); defaults to the saved selection
    #[arg(long)]
    pub country: Option<CountryCode>,
}

impl InsightsArgs {
    pub fn execute<S: KeyValueStore>(&self, kv: &S) -> anyhow::Result<()> {
        let country = self
            .country
            .unwrap_or_else(|| store::country_preference(kv));

        // Sample figures are USD; display in the selected currency
        let in_local = |usd: i64| -> String {
            let converted: f64 = convert_usd(Decimal::from(usd), country)
                .try_into()
                .unwrap_or(0.0);
            format_currency(converted, country)
        };

        let stats = market_stats();
        println!("Market overview ({country}):");
        println!(
            "  Average price: {} ({:+.1}% YoY)",
            in_local(stats.average_price),
            stats.price_change_pct
        );
        println!("  Days on market: {}", stats.days_on_market);
        println!("  Inventory: {:.1} months", stats.inventory_months);
        println!("  Sales volume: {}/mo", stats.sales_volume);
        println!("  Price per sqft: {}", in_local(stats.price_per_sqft));

        println!();
        println!("Neighborhoods:");
        for hood in neighborhoods() {
            println!(
                "  {} — {} ({:+.1}%, {:?} inventory, rated {})",
                hood.name,
                in_local(hood.average_price),
                hood.growth_pct,
                hood.inventory,
                hood.rating
            );
        }

        println!();
        println!("Forecast:");
        let mut rng = DailyRng::for_date(Utc::now().date_naive());
        for entry in market_forecast(&mut rng) {
            println!("  {}: {:+.1}%", entry.label, entry.value_pct);
        }

        println!();
        println!("Market factors:");
        for factor in market_factors() {
            let direction = if factor.positive { "+" } else { "-" };
            println!("  [{}] {} (impact {})", direction, factor.name, factor.impact);
        }

        println!();
        println!("Recent comparable sales:");
        for comp in comparable_properties() {
            println!(
                "  {} — {} ({} sqft, {} bd/{} ba, sold {})",
                comp.address,
                in_local(comp.price),
                comp.sqft,
                comp.bedrooms,
                comp.bathrooms,
                comp.sold_date
            );
        }

        Ok(())
    }
}
