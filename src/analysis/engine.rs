//! Canonical lease analysis engine
//!
//! Every behavioral variation of the lease formula (abatement basis and
//! placement, parking inclusion) is an explicit `EngineConfig` flag rather
//! than a per-call-site re-derivation; the config carries a version number
//! so persisted comparisons can record which behavior produced them.

use log::debug;
use serde::{Deserialize, Serialize};

use super::metrics;
use super::rates;
use super::rows::{AnalysisResult, PeriodRow};
use super::schedule::{build_periods, SchedulePeriod};
use crate::scenario::params::ScenarioParams;

/// Current engine behavior version
pub const CONFIG_VERSION: u32 = 1;

/// Which rate abatement credits are computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbatementBasis {
    /// Abatement credits base rent only (default)
    BaseRent,
    /// Abatement credits base rent plus tenant OPEX
    GrossRent,
}

/// Where free-rent months land relative to the stated term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbatementPlacement {
    /// Free months credit rent inside the stated term (default)
    InsideTerm,
    /// Free months extend occupancy past the stated term: no in-period
    /// credit, but the effective-rent denominator counts the extended years
    AddedToTerm,
}

/// Behavioral flags for a lease analysis run
///
/// Every flag is explicit; in particular the parking flags are real
/// configuration, never hard-coded assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Behavior version stamped into this config's semantics
    pub version: u32,

    /// Rate basis for abatement credits
    pub abatement_basis: AbatementBasis,

    /// Whether free months sit inside the stated term or extend it
    pub abatement_placement: AbatementPlacement,

    /// Whether parking costs join the NPV/IRR cash-flow series
    pub include_parking_in_npv: bool,

    /// Whether parking costs join the nominal total and effective rent
    pub include_parking_in_effective_rent: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            abatement_basis: AbatementBasis::BaseRent,
            abatement_placement: AbatementPlacement::InsideTerm,
            include_parking_in_npv: true,
            include_parking_in_effective_rent: true,
        }
    }
}

/// The lease cash-flow and metrics engine
///
/// Each run is a pure function of its inputs: no shared state, no I/O.
/// Scenarios for comparison mode can therefore run in parallel with no
/// coordination (see `runner`).
pub struct LeaseEngine {
    config: EngineConfig,
}

impl LeaseEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a full scenario analysis: period schedule, signed cash-flow
    /// series, and summary metrics
    pub fn analyze(&self, params: &ScenarioParams) -> AnalysisResult {
        let p = params.normalized();
        debug!(
            "analyzing scenario '{}': term {} mo, {} SF, base {}/SF/yr",
            p.name, p.term_months, p.area_sf, p.base_rate
        );

        let schedule = build_periods(p.term_months, p.start_date);
        let mut periods = Vec::with_capacity(schedule.len());
        let mut cash_flows = Vec::with_capacity(schedule.len());

        for sched in &schedule {
            let row = self.build_period(&p, sched);
            cash_flows.push(row.net_cash_flow);
            periods.push(row);
        }

        let summary = metrics::build_summary(&self.config, &p, &periods, &cash_flows);

        AnalysisResult {
            periods,
            cash_flows,
            summary,
        }
    }

    fn build_period(&self, params: &ScenarioParams, sched: &SchedulePeriod) -> PeriodRow {
        let i = sched.index;
        let area = area_for_period(params, i);

        let base_rate = rates::escalated_rate(
            params.base_rate,
            i,
            params.rent_escalation_pct,
            params.rent_escalation_overrides.as_deref(),
        );
        let projected_opex =
            rates::escalated_rate(params.opex_rate, i, params.opex_escalation_pct, None);
        let opex_rate =
            rates::tenant_opex_rate(params.lease_type, projected_opex, params.opex_stop());
        let parking_rate =
            rates::parking_rate(&params.parking, params.parking_escalation_pct, i, area);

        let base_cost = base_rate * area * sched.weight;
        let opex_cost = opex_rate * area * sched.weight;
        let parking_cost = parking_rate * area * sched.weight;

        let abatement_rate = match self.config.abatement_basis {
            AbatementBasis::BaseRent => base_rate,
            AbatementBasis::GrossRent => base_rate + opex_rate,
        };
        let abatement_credit = match self.config.abatement_placement {
            AbatementPlacement::InsideTerm => {
                params.abatement.months_for_period(i) / 12.0 * abatement_rate * area
            }
            // Free months extend occupancy instead of crediting rent
            AbatementPlacement::AddedToTerm => 0.0,
        };

        let (one_time_credit, one_time_cost) = if i == 0 {
            let credit = (params.ti_allowance_sf + params.additional_credit_sf) * area;
            let construction_balance =
                (params.construction_cost_sf - params.ti_allowance_sf).max(0.0);
            let cost = (params.moving_cost_sf + construction_balance) * area;
            (credit, cost)
        } else {
            (0.0, 0.0)
        };

        let mut outflow = base_cost + opex_cost;
        if self.config.include_parking_in_npv {
            outflow += parking_cost;
        }
        let net_cash_flow = -outflow + abatement_credit + one_time_credit - one_time_cost;

        PeriodRow {
            index: i,
            start: sched.start,
            end: sched.end,
            weight: sched.weight,
            area_sf: area,
            base_rate,
            opex_rate,
            parking_rate,
            base_cost,
            opex_cost,
            parking_cost,
            abatement_credit,
            one_time_credit,
            one_time_cost,
            net_cash_flow,
        }
    }
}

impl Default for LeaseEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Area in effect for a period: the post-change area once the period's
/// opening month (1-based elapsed count, `12 * index + 1`) reaches the
/// configured change month
fn area_for_period(params: &ScenarioParams, period_index: usize) -> f64 {
    let opening_month = 12 * period_index as u32 + 1;
    match params.area_change {
        Some(change) if change.month <= opening_month => {
            (params.area_sf + change.delta_sf).max(1.0)
        }
        _ => params.area_sf,
    }
}
