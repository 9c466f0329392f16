//! `value` subcommand: full valuation report

use crate::config::Config;
use crate::country::{format_currency, CountryCode};
use crate::store::{self, KeyValueStore};
use crate::valuation::{
    estimate, price_history, project, suggested_pricing, Horizon, PropertyAttributes, Scenario,
};
use chrono::{Datelike, Utc};
use clap::Args;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Interior area in square feet
    #[arg(long)]
    pub sqft: Option<f64>,

    /// Bedroom count
    #[arg(long)]
    pub bedrooms: Option<f64>,

    /// Bathroom count
    #[arg(long)]
    pub bathrooms: Option<f64>,

    /// Construction year
    #[arg(long)]
    pub year_built: Option<i32>,

    /// Street address, display only
    #[arg(long)]
    pub address: Option<String>,

    /// Market country (IN, US, EU, UK, AE); defaults to the saved selection
    #[arg(long)]
    pub country: Option<CountryCode>,

    /// Projection scenario
    #[arg(long, default_value = "base")]
    pub scenario: Scenario,

    /// Projection horizon in years (10, 15, or 20)
    #[arg(long, default_value_t = 15)]
    pub years: u32,
}

impl ValueArgs {
    pub fn execute<S: KeyValueStore>(&self, config: &Config, kv: &mut S) -> anyhow::Result<()> {
        let country = match self.country {
            Some(country) => {
                store::set_country_preference(kv, country);
                country
            }
            None => store::country_preference(kv),
        };

        let attrs = PropertyAttributes::from_partial(
            self.sqft,
            self.bedrooms,
            self.bathrooms,
            self.year_built,
            self.address.clone(),
        );
        let year = Utc::now().year();
        let horizon = Horizon::new(self.years)?;

        let est = estimate(&attrs, &config.engine, year);
        let band = suggested_pricing(&est, attrs.square_footage, country);
        let history = price_history(est.current_value, country, year);
        let projection = project(est.current_value, country, self.scenario, horizon, year);

        tracing::info!(
            country = %country,
            current_value = est.current_value,
            "Valuation computed"
        );

        if let Some(address) = &attrs.address {
            println!("Property: {address}");
        }
        println!(
            "Attributes: {:.0} sqft, {} bed, {} bath, built {}",
            attrs.square_footage, attrs.bedrooms, attrs.bathrooms, attrs.year_built
        );
        println!();
        println!("Estimated value: {}", format_currency(est.current_value as f64, country));
        println!(
            "Range: {} - {} (confidence {}%)",
            format_currency(est.price_range_low as f64, country),
            format_currency(est.price_range_high as f64, country),
            est.confidence_score
        );
        println!();
        println!("Suggested pricing:");
        println!(
            "  Average: {} - {}",
            format_currency(band.average_low as f64, country),
            format_currency(band.average_high as f64, country)
        );
        println!(
            "  Luxury:  {} - {}",
            format_currency(band.luxury_low as f64, country),
            format_currency(band.luxury_high as f64, country)
        );
        println!();
        println!("Price history:");
        for point in &history {
            println!("  {}  {}", point.year, format_currency(point.value as f64, country));
        }
        println!();
        println!(
            "Projection ({} years, {} scenario, {:.1}%/yr):",
            horizon.years(),
            self.scenario,
            projection.growth_rate * 100.0
        );
        println!(
            "  Ending value: {}",
            format_currency(projection.ending_value() as f64, country)
        );
        println!("  CAGR: {:.2}%", projection.cagr_pct);
        println!("  Total change: {:.2}%", projection.total_change_pct);

        Ok(())
    }
}
