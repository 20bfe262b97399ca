//! Scenario summary and display-record formatting
//!
//! `ScenarioSummary` is the typed aggregate; `display_map()` renders the
//! ordered string-keyed record the presentation layer consumes
//! (`"Total Cost" -> "$123,456"`). Undefined metrics render as "N/A".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate metrics for one lease scenario, derived strictly from the
/// period sequence and never mutated after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub start_date: NaiveDate,
    pub term_months: u32,
    pub area_sf: f64,

    /// Total nominal (undiscounted) occupancy cost over the term
    pub total_cost: f64,

    /// NPV magnitude at the scenario discount rate (the series is
    /// cost-negative; this surfaces present-value total cost)
    pub npv: f64,
    pub discount_rate_pct: f64,

    /// Annual IRR percentage, when the series admits one
    pub irr_pct: Option<f64>,

    /// Months to recoup abatement + TI + additional credit via base rent
    pub payback_months: Option<f64>,

    /// Blended $/SF/yr over un-prorated full years
    pub avg_effective_rent: Option<f64>,

    // Echoed one-time totals
    pub ti_allowance_total: f64,
    pub additional_credit_total: f64,
    pub moving_cost_total: f64,
    pub construction_cost_total: f64,
}

impl ScenarioSummary {
    /// Ordered display record with the summary keys the presentation layer
    /// expects
    pub fn display_map(&self) -> Vec<(String, String)> {
        vec![
            ("Option".to_string(), self.name.clone()),
            (
                "Start Date".to_string(),
                self.start_date.format("%m/%d/%Y").to_string(),
            ),
            ("Term (mos)".to_string(), self.term_months.to_string()),
            ("RSF".to_string(), group_thousands(self.area_sf.round() as i64)),
            ("Total Cost".to_string(), format_money(self.total_cost)),
            (
                "Avg Eff. Rent".to_string(),
                match self.avg_effective_rent {
                    Some(rent) => format!("${:.2} /SF/yr", rent),
                    None => "N/A".to_string(),
                },
            ),
            (
                "Payback".to_string(),
                match self.payback_months {
                    Some(months) => format!("{} mo", months.round() as i64),
                    None => "N/A".to_string(),
                },
            ),
            (
                format!("NPV ({:.2}%):", self.discount_rate_pct),
                format_money(self.npv),
            ),
            (
                "IRR".to_string(),
                match self.irr_pct {
                    Some(pct) => format!("{:.2}%", pct),
                    None => "N/A".to_string(),
                },
            ),
            (
                "TI Allowance".to_string(),
                format_money(self.ti_allowance_total),
            ),
            ("Moving Exp".to_string(), format_money(self.moving_cost_total)),
            (
                "Construction Cost".to_string(),
                format_money(self.construction_cost_total),
            ),
            (
                "Additional Credit".to_string(),
                format_money(self.additional_credit_total),
            ),
        ]
    }
}

/// Format a dollar amount rounded to whole dollars with thousands grouping
pub fn format_money(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
