//! Metrics assembly: nominal totals, payback, average effective rent
//!
//! Error policy: every zero or negative denominator degrades to `None`
//! (rendered "N/A" downstream); no metric calculation aborts a run.

use log::debug;

use super::engine::{AbatementPlacement, EngineConfig};
use super::irr;
use super::rows::PeriodRow;
use super::summary::ScenarioSummary;
use crate::scenario::params::ScenarioParams;

/// Total nominal (undiscounted) occupancy cost across the schedule.
/// Parking participates per the engine's effective-rent flag.
pub fn total_nominal_cost(config: &EngineConfig, periods: &[PeriodRow]) -> f64 {
    periods
        .iter()
        .map(|p| {
            let mut cost =
                p.base_cost + p.opex_cost + p.one_time_cost - p.abatement_credit - p.one_time_credit;
            if config.include_parking_in_effective_rent {
                cost += p.parking_cost;
            }
            cost
        })
        .sum()
}

/// Months to recoup concessions (abatement + TI + additional credit)
/// through base rent; `None` when base rent is zero
pub fn payback_months(params: &ScenarioParams) -> Option<f64> {
    let monthly_base_rent = params.base_rate * params.area_sf / 12.0;
    if monthly_base_rent <= 0.0 {
        return None;
    }
    let credits = params.ti_allowance_total() + params.additional_credit_total();
    Some(params.abatement.total_months() + credits / monthly_base_rent)
}

/// Blended $/SF/yr over the term. The denominator counts whole years
/// (full years + 1 if a stub exists), deliberately un-prorated.
pub fn average_effective_rent(total_nominal: f64, period_count: usize, area_sf: f64) -> Option<f64> {
    if period_count == 0 || area_sf <= 0.0 {
        return None;
    }
    Some(total_nominal / (period_count as f64 * area_sf))
}

/// Assemble the scenario summary from the period schedule and cash-flow
/// series. `params` must already be normalized.
pub fn build_summary(
    config: &EngineConfig,
    params: &ScenarioParams,
    periods: &[PeriodRow],
    cash_flows: &[f64],
) -> ScenarioSummary {
    let total_cost = total_nominal_cost(config, periods);
    let npv_raw = irr::npv(params.discount_rate_pct / 100.0, cash_flows);
    let irr_pct = irr::irr(cash_flows).map(|rate| rate * 100.0);

    // Added-to-term free months lengthen occupancy, so the effective-rent
    // denominator counts the extended whole years
    let effective_years = match config.abatement_placement {
        AbatementPlacement::InsideTerm => periods.len(),
        AbatementPlacement::AddedToTerm => {
            let extended = params.term_months as f64 + params.abatement.total_months();
            (extended / 12.0).ceil() as usize
        }
    };

    debug!(
        "scenario '{}': {} periods, total cost {:.2}, npv {:.2}",
        params.name,
        periods.len(),
        total_cost,
        npv_raw
    );

    ScenarioSummary {
        name: params.name.clone(),
        start_date: params.start_date,
        term_months: params.term_months,
        area_sf: params.area_sf,
        total_cost,
        npv: npv_raw.abs(),
        discount_rate_pct: params.discount_rate_pct,
        irr_pct,
        payback_months: payback_months(params),
        avg_effective_rent: average_effective_rent(total_cost, effective_years, params.area_sf),
        ti_allowance_total: params.ti_allowance_total(),
        additional_credit_total: params.additional_credit_total(),
        moving_cost_total: params.moving_cost_total(),
        construction_cost_total: params.construction_cost_total(),
    }
}
