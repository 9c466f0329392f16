//! CLI interface for estate-luxe
//!
//! Provides subcommands for:
//! - `value`: Full valuation report for a property
//! - `predict`: Query the external prediction endpoint
//! - `insights`: Market insights for a country
//! - `calc`: Investment calculator
//! - `config`: Show effective configuration

mod calc;
mod insights;
mod predict;
mod value;

pub use calc::CalcArgs;
pub use insights::InsightsArgs;
pub use predict::PredictArgs;
pub use value::ValueArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "estate-luxe")]
#[command(about = "Deterministic property valuation and projection engine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full valuation report for a property
    Value(ValueArgs),
    /// Query the external prediction endpoint
    Predict(PredictArgs),
    /// Market insights for a country
    Insights(InsightsArgs),
    /// Investment calculator
    Calc(CalcArgs),
    /// Show effective configuration
    Config,
}
