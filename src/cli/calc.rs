//! `calc` subcommand: investment calculator

use crate::calculator::{analyze, InvestmentInputs};
use crate::country::{format_currency, CountryCode};
use crate::store::{self, KeyValueStore};
use clap::Args;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Purchase price
    #[arg(long, default_value_t = 450_000.0)]
    pub price: f64,

    /// Down payment, percent of price
    #[arg(long, default_value_t = 20.0)]
    pub down: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 6.5)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,

    /// Expected monthly rent
    #[arg(long, default_value_t = 2_800.0)]
    pub rent: f64,

    /// Annual property tax, percent of price
    #[arg(long, default_value_t = 1.2)]
    pub tax: f64,

    /// Annual insurance, percent of price
    #[arg(long, default_value_t = 0.8)]
    pub insurance: f64,

    /// Annual maintenance, percent of price
    #[arg(long, default_value_t = 1.0)]
    pub maintenance: f64,

    /// Vacancy allowance, percent of rent
    #[arg(long, default_value_t = 5.0)]
    pub vacancy: f64,

    /// Expected annual appreciation, percent
    #[arg(long, default_value_t = 7.5)]
    pub appreciation: f64,

    /// Display currency country
    #[arg(long)]
    pub country: Option<CountryCode>,
}

impl CalcArgs {
    pub fn execute<S: KeyValueStore>(&self, kv: &S) -> anyhow::Result<()> {
        let country = self
            .country
            .unwrap_or_else(|| store::country_preference(kv));

        let inputs = InvestmentInputs {
            property_price: self.price,
            down_payment_pct: self.down,
            interest_rate_pct: self.rate,
            loan_term_years: self.term,
            monthly_rent: self.rent,
            property_tax_pct: self.tax,
            insurance_pct: self.insurance,
            maintenance_pct: self.maintenance,
            vacancy_pct: self.vacancy,
            appreciation_pct: self.appreciation,
        };
        let analysis = analyze(&inputs);

        let money = |amount: f64| format_currency(amount, country);

        println!("Financing:");
        println!("  Down payment: {}", money(analysis.down_payment));
        println!("  Loan amount: {}", money(analysis.loan_amount));
        println!("  Monthly payment: {}", money(analysis.monthly_payment));
        println!();
        println!("Monthly cash flow:");
        println!("  Effective rent: {}", money(analysis.effective_rent));
        println!("  Property tax: {}", money(analysis.monthly_property_tax));
        println!("  Insurance: {}", money(analysis.monthly_insurance));
        println!("  Maintenance: {}", money(analysis.monthly_maintenance));
        println!("  Net: {}", money(analysis.monthly_cash_flow));
        println!();
        println!("Returns:");
        println!("  Annual cash flow: {}", money(analysis.annual_cash_flow));
        println!("  Cash-on-cash: {:.2}%", analysis.cash_on_cash_return_pct);
        println!("  Cap rate: {:.2}%", analysis.cap_rate_pct);
        println!();
        println!("Appreciation:");
        println!("  1 year:  {}", money(analysis.future_value_1y));
        println!("  5 years: {}", money(analysis.future_value_5y));
        println!("  10 years: {}", money(analysis.future_value_10y));

        Ok(())
    }
}
