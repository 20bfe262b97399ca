//! Per-period output structures for lease analysis

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::ScenarioSummary;

/// One annual (or trailing stub) period of the cash-flow schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    /// 0-based period index
    pub index: usize,

    /// Period date range (inclusive)
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// Fraction of a year (1.0 for full years, extra_months / 12 for the stub)
    pub weight: f64,

    /// Square footage in effect this period
    pub area_sf: f64,

    // Rates in effect ($/SF/yr)
    pub base_rate: f64,
    pub opex_rate: f64,
    pub parking_rate: f64,

    // Dollar amounts, prorated by weight
    pub base_cost: f64,
    pub opex_cost: f64,
    pub parking_cost: f64,

    /// Abatement credit applied this period
    pub abatement_credit: f64,

    /// One-time credits (TI allowance + additional credit), period 0 only
    pub one_time_credit: f64,

    /// One-time costs (moving/FF&E + construction balance beyond TI),
    /// period 0 only
    pub one_time_cost: f64,

    /// Signed net cash flow (cost-negative)
    pub net_cash_flow: f64,
}

/// Complete result of one lease scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-period schedule rows
    pub periods: Vec<PeriodRow>,

    /// Signed net cash-flow series feeding NPV/IRR (one entry per period)
    pub cash_flows: Vec<f64>,

    /// Aggregate metrics
    pub summary: ScenarioSummary,
}
