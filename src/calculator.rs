//! Investment calculator
//!
//! Mortgage amortization, rental cash flow, cash-on-cash return, cap rate,
//! and appreciation projections. Pure arithmetic over the inputs.

use serde::{Deserialize, Serialize};

/// Inputs to the investment analysis. Percentages are whole numbers
/// (20 means 20%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub property_price: f64,
    pub down_payment_pct: f64,
    pub interest_rate_pct: f64,
    pub loan_term_years: u32,
    pub monthly_rent: f64,
    pub property_tax_pct: f64,
    pub insurance_pct: f64,
    pub maintenance_pct: f64,
    pub vacancy_pct: f64,
    pub appreciation_pct: f64,
}

impl Default for InvestmentInputs {
    fn default() -> Self {
        Self {
            property_price: 450_000.0,
            down_payment_pct: 20.0,
            interest_rate_pct: 6.5,
            loan_term_years: 30,
            monthly_rent: 2_800.0,
            property_tax_pct: 1.2,
            insurance_pct: 0.8,
            maintenance_pct: 1.0,
            vacancy_pct: 5.0,
            appreciation_pct: 7.5,
        }
    }
}

/// Computed investment metrics
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentAnalysis {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_maintenance: f64,
    pub effective_rent: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub cash_on_cash_return_pct: f64,
    pub cap_rate_pct: f64,
    pub future_value_1y: f64,
    pub future_value_5y: f64,
    pub future_value_10y: f64,
}

/// Run the full analysis.
pub fn analyze(inputs: &InvestmentInputs) -> InvestmentAnalysis {
    let down_payment = inputs.property_price * inputs.down_payment_pct / 100.0;
    let loan_amount = inputs.property_price - down_payment;
    let monthly_rate = inputs.interest_rate_pct / 100.0 / 12.0;
    let num_payments = (inputs.loan_term_years * 12) as f64;

    // Zero-interest loans degrade to straight-line principal
    let monthly_payment = if monthly_rate == 0.0 || num_payments == 0.0 {
        if num_payments == 0.0 {
            0.0
        } else {
            loan_amount / num_payments
        }
    } else {
        let compound = (1.0 + monthly_rate).powf(num_payments);
        loan_amount * monthly_rate * compound / (compound - 1.0)
    };

    let monthly_property_tax = inputs.property_price * inputs.property_tax_pct / 100.0 / 12.0;
    let monthly_insurance = inputs.property_price * inputs.insurance_pct / 100.0 / 12.0;
    let monthly_maintenance = inputs.property_price * inputs.maintenance_pct / 100.0 / 12.0;
    let effective_rent = inputs.monthly_rent * (1.0 - inputs.vacancy_pct / 100.0);

    let total_monthly_expenses =
        monthly_payment + monthly_property_tax + monthly_insurance + monthly_maintenance;
    let monthly_cash_flow = effective_rent - total_monthly_expenses;
    let annual_cash_flow = monthly_cash_flow * 12.0;
    let cash_on_cash_return_pct = if down_payment > 0.0 {
        annual_cash_flow / down_payment * 100.0
    } else {
        0.0
    };

    let annual_operating_costs =
        (monthly_property_tax + monthly_insurance + monthly_maintenance) * 12.0;
    let cap_rate_pct =
        (inputs.monthly_rent * 12.0 - annual_operating_costs) / inputs.property_price * 100.0;

    let growth = 1.0 + inputs.appreciation_pct / 100.0;

    InvestmentAnalysis {
        down_payment,
        loan_amount,
        monthly_payment,
        monthly_property_tax,
        monthly_insurance,
        monthly_maintenance,
        effective_rent,
        monthly_cash_flow,
        annual_cash_flow,
        cash_on_cash_return_pct,
        cap_rate_pct,
        future_value_1y: inputs.property_price * growth,
        future_value_5y: inputs.property_price * growth.powi(5),
        future_value_10y: inputs.property_price * growth.powi(10),
    }
}
