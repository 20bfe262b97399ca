//! Scenario parameter structures for lease analysis
//!
//! One `ScenarioParams` record fully describes a lease scenario. The engine
//! treats it as immutable input; `normalized()` applies the tolerant
//! clamping rules once at the boundary so downstream code never sees a
//! degenerate term or area.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default annual escalation percentage for rent and OPEX
pub const DEFAULT_ESCALATION_PCT: f64 = 3.0;

fn default_escalation() -> f64 {
    DEFAULT_ESCALATION_PCT
}

/// Lease structure: who absorbs operating-expense growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseType {
    /// Triple Net (NNN): tenant pays full projected OPEX
    TripleNet,
    /// Full Service (Gross): landlord absorbs a base-year OPEX amount,
    /// tenant pays only increases above it
    FullService,
}

impl Default for LeaseType {
    fn default() -> Self {
        LeaseType::TripleNet
    }
}

/// Parking cost configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParkingConfig {
    /// No parking cost
    None,
    /// Flat $/space/month across a fixed space count
    Flat {
        monthly_cost: f64,
        spaces: u32,
    },
    /// Reserved/unreserved split; space count derived from a ratio per
    /// 1,000 SF of the current period's area
    Tiered {
        ratio_per_1000_sf: f64,
        reserved_spaces: u32,
        reserved_monthly_cost: f64,
        unreserved_monthly_cost: f64,
    },
}

impl Default for ParkingConfig {
    fn default() -> Self {
        ParkingConfig::None
    }
}

/// Rent abatement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Abatement {
    /// Free-rent months applied entirely in period 0
    Uniform { free_months: f64 },
    /// Abated months per period; indices past the end of the list read as 0
    Schedule(Vec<f64>),
}

impl Default for Abatement {
    fn default() -> Self {
        Abatement::Uniform { free_months: 0.0 }
    }
}

impl Abatement {
    /// Abated months attributed to a given period
    pub fn months_for_period(&self, period_index: usize) -> f64 {
        match self {
            Abatement::Uniform { free_months } => {
                if period_index == 0 {
                    *free_months
                } else {
                    0.0
                }
            }
            Abatement::Schedule(months) => months.get(period_index).copied().unwrap_or(0.0),
        }
    }

    /// Total abated months across the term (used for payback)
    pub fn total_months(&self) -> f64 {
        match self {
            Abatement::Uniform { free_months } => *free_months,
            Abatement::Schedule(months) => months.iter().sum(),
        }
    }
}

/// Mid-term change in leased area: from `month` onward (1-based elapsed
/// month), the scenario area becomes `initial + delta_sf`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaChange {
    pub month: u32,
    pub delta_sf: f64,
}

/// A complete lease scenario input record
///
/// Field units follow market convention: rates are $/SF/yr, one-time
/// amounts are $/SF, parking costs are $/space/month, escalations are
/// annual percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Display name for the scenario
    pub name: String,

    /// Lease commencement date
    pub start_date: NaiveDate,

    /// Lease term in months (clamped to minimum 1)
    pub term_months: u32,

    /// Rentable square footage (clamped to minimum 1)
    pub area_sf: f64,

    /// Starting base rent ($/SF/yr)
    pub base_rate: f64,

    /// Flat annual rent escalation percentage
    #[serde(default = "default_escalation")]
    pub rent_escalation_pct: f64,

    /// Per-period escalation overrides; missing indices fall back to the
    /// flat percentage
    #[serde(default)]
    pub rent_escalation_overrides: Option<Vec<f64>>,

    /// Lease structure (NNN vs Full Service)
    #[serde(default)]
    pub lease_type: LeaseType,

    /// Base-year OPEX stop for Full Service leases; when absent or zero the
    /// first-year OPEX rate is used as the stop
    #[serde(default)]
    pub base_year_opex: Option<f64>,

    /// Starting operating expenses ($/SF/yr)
    pub opex_rate: f64,

    /// Annual OPEX escalation percentage
    #[serde(default = "default_escalation")]
    pub opex_escalation_pct: f64,

    /// Parking configuration
    #[serde(default)]
    pub parking: ParkingConfig,

    /// Annual parking cost escalation percentage
    #[serde(default)]
    pub parking_escalation_pct: f64,

    /// Rent abatement schedule
    #[serde(default)]
    pub abatement: Abatement,

    /// Tenant improvement allowance ($/SF, landlord credit)
    #[serde(default)]
    pub ti_allowance_sf: f64,

    /// Additional landlord credit ($/SF)
    #[serde(default)]
    pub additional_credit_sf: f64,

    /// Moving / FF&E cost ($/SF, tenant cost)
    #[serde(default)]
    pub moving_cost_sf: f64,

    /// Construction cost ($/SF); only the balance beyond the TI allowance
    /// hits the cash flow
    #[serde(default)]
    pub construction_cost_sf: f64,

    /// Discount rate percentage for NPV
    #[serde(default)]
    pub discount_rate_pct: f64,

    /// Optional mid-term area change event
    #[serde(default)]
    pub area_change: Option<AreaChange>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            name: "Option 1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            term_months: 60,
            area_sf: 10_000.0,
            base_rate: 46.0,
            rent_escalation_pct: DEFAULT_ESCALATION_PCT,
            rent_escalation_overrides: None,
            lease_type: LeaseType::TripleNet,
            base_year_opex: None,
            opex_rate: 12.0,
            opex_escalation_pct: DEFAULT_ESCALATION_PCT,
            parking: ParkingConfig::None,
            parking_escalation_pct: 0.0,
            abatement: Abatement::default(),
            ti_allowance_sf: 0.0,
            additional_credit_sf: 0.0,
            moving_cost_sf: 0.0,
            construction_cost_sf: 0.0,
            discount_rate_pct: 0.0,
            area_change: None,
        }
    }
}

impl ScenarioParams {
    /// Apply the tolerant-input policy: term and area are clamped to a
    /// minimum of 1, and an area-change event outside `[1, term]` is
    /// dropped. Called once by the engine before any calculation.
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        p.term_months = p.term_months.max(1);
        p.area_sf = p.area_sf.max(1.0);
        if let Some(change) = p.area_change {
            if change.month < 1 || change.month > p.term_months {
                p.area_change = None;
            }
        }
        p
    }

    /// Base-year OPEX stop in effect for Full Service leases
    pub fn opex_stop(&self) -> f64 {
        match self.base_year_opex {
            Some(stop) if stop > 0.0 => stop,
            _ => self.opex_rate,
        }
    }

    /// Total TI allowance in dollars
    pub fn ti_allowance_total(&self) -> f64 {
        self.ti_allowance_sf * self.area_sf
    }

    /// Total additional credit in dollars
    pub fn additional_credit_total(&self) -> f64 {
        self.additional_credit_sf * self.area_sf
    }

    /// Total moving cost in dollars
    pub fn moving_cost_total(&self) -> f64 {
        self.moving_cost_sf * self.area_sf
    }

    /// Total construction cost in dollars
    pub fn construction_cost_total(&self) -> f64 {
        self.construction_cost_sf * self.area_sf
    }
}
