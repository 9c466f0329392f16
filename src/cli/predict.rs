//! `predict` subcommand: query the external prediction endpoint

use crate::config::Config;
use crate::country::{convert_usd, format_currency, CountryCode};
use crate::predict::{PredictFeatures, PredictionApi, PredictionClient, PredictionClientConfig};
use crate::store::{self, KeyValueStore};
use clap::Args;
use rust_decimal::Decimal;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Overall material and finish quality, 1-10
    #[arg(long, default_value_t = 7.0)]
    pub overall_quality: f64,

    /// Construction year
    #[arg(long, default_value_t = 2003.0)]
    pub year_built: f64,

    /// Above-grade living area, sqft
    #[arg(long, default_value_t = 1710.0)]
    pub living_area: f64,

    /// Garage capacity in cars
    #[arg(long, default_value_t = 2.0)]
    pub garage_cars: f64,

    /// Full bathrooms above grade
    #[arg(long, default_value_t = 2.0)]
    pub full_baths: f64,

    /// Total basement area, sqft
    #[arg(long, default_value_t = 856.0)]
    pub basement_area: f64,

    /// Country to convert the USD prediction into
    #[arg(long)]
    pub country: Option<CountryCode>,
}

impl PredictArgs {
    pub async fn execute<S: KeyValueStore>(&self, config: &Config, kv: &S) -> anyhow::Result<()> {
        let country = self
            .country
            .unwrap_or_else(|| store::country_preference(kv));

        let features = PredictFeatures {
            overall_quality: self.overall_quality,
            year_built: self.year_built,
            living_area: self.living_area,
            garage_capacity: self.garage_cars,
            full_baths: self.full_baths,
            basement_area: self.basement_area,
        };

        let client = PredictionClient::with_config(PredictionClientConfig {
            base_url: config.prediction.base_url.clone(),
            timeout: Duration::from_secs(config.prediction.timeout_secs),
        });

        let prediction_usd = client.predict(&features.to_feature_map()).await?;
        tracing::info!(prediction_usd, "Prediction received");

        let usd = Decimal::try_from(prediction_usd).unwrap_or_default();
        let local: f64 = convert_usd(usd, country).try_into().unwrap_or(0.0);

        println!("Predicted price: {}", format_currency(local, country));
        println!("  ({} USD before conversion)", prediction_usd.round());

        Ok(())
    }
}
