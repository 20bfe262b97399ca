//! Property purchase scenario inputs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_closing_costs_pct() -> f64 {
    3.0
}

/// A complete purchase scenario input record
///
/// Dollar amounts are annual totals unless noted; percentages are annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseParams {
    /// Display name for the scenario
    pub name: String,

    /// Acquisition price
    pub property_value: f64,

    /// Down payment as a percentage of the purchase price
    pub down_payment_pct: f64,

    /// Mortgage amortization term in years
    pub loan_term_years: u32,

    /// Annual mortgage interest rate percentage
    pub interest_rate_pct: f64,

    /// Closing date
    pub purchase_date: NaiveDate,

    /// Analysis horizon in years
    pub holding_period_years: u32,

    /// Annual property appreciation percentage
    pub annual_appreciation_pct: f64,

    /// Gross rental income in year 0
    #[serde(default)]
    pub annual_rental_income: f64,

    /// Annual rental growth percentage
    #[serde(default)]
    pub annual_rental_increase_pct: f64,

    // Annual carrying costs
    #[serde(default)]
    pub annual_property_tax: f64,
    #[serde(default)]
    pub annual_insurance: f64,
    #[serde(default)]
    pub annual_maintenance: f64,
    #[serde(default)]
    pub annual_hoa: f64,

    /// Closing costs as a percentage of the purchase price
    #[serde(default = "default_closing_costs_pct")]
    pub closing_costs_pct: f64,

    /// Discount rate percentage for NPV
    #[serde(default)]
    pub discount_rate_pct: f64,
}

impl Default for PurchaseParams {
    fn default() -> Self {
        Self {
            name: "Purchase 1".to_string(),
            property_value: 1_000_000.0,
            down_payment_pct: 25.0,
            loan_term_years: 30,
            interest_rate_pct: 6.5,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            holding_period_years: 10,
            annual_appreciation_pct: 3.0,
            annual_rental_income: 0.0,
            annual_rental_increase_pct: 0.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            annual_maintenance: 0.0,
            annual_hoa: 0.0,
            closing_costs_pct: default_closing_costs_pct(),
            discount_rate_pct: 0.0,
        }
    }
}

impl PurchaseParams {
    /// Down payment in dollars
    pub fn down_payment(&self) -> f64 {
        self.property_value * self.down_payment_pct / 100.0
    }

    /// Initial loan principal
    pub fn loan_amount(&self) -> f64 {
        self.property_value - self.down_payment()
    }

    /// Closing costs in dollars
    pub fn closing_costs(&self) -> f64 {
        self.property_value * self.closing_costs_pct / 100.0
    }

    /// Total annual carrying costs excluding debt service
    pub fn annual_expenses(&self) -> f64 {
        self.annual_property_tax + self.annual_insurance + self.annual_maintenance + self.annual_hoa
    }
}
