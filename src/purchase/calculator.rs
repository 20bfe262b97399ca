//! Purchase scenario analysis: amortization, yearly cash flows, metrics

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use super::params::PurchaseParams;
use crate::analysis::irr;
use crate::analysis::schedule::add_months;
use crate::analysis::summary::format_money;

/// One year of the purchase holding period (year 0 carries the purchase)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRow {
    /// 0-based year; year 0 includes the down payment and closing costs
    pub year: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,

    pub property_value: f64,
    pub rental_income: f64,
    pub operating_expenses: f64,
    pub mortgage_payments: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub net_cash_flow: f64,
    pub cumulative_equity: f64,
}

/// Aggregate metrics for a purchase scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub name: String,
    pub purchase_date: NaiveDate,
    pub property_value: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub closing_costs: f64,
    pub total_investment: f64,
    pub final_property_value: f64,
    pub total_return: f64,
    pub npv: f64,
    pub discount_rate_pct: f64,
    pub irr_pct: Option<f64>,
    pub roi_pct: Option<f64>,
    pub payback_years: u32,
    pub cap_rate_pct: Option<f64>,
    pub cash_on_cash_pct: Option<f64>,
}

impl PurchaseSummary {
    /// Ordered display record with the summary keys the presentation layer
    /// expects
    pub fn display_map(&self) -> Vec<(String, String)> {
        let pct_or_na =
            |value: Option<f64>| value.map_or("N/A".to_string(), |v| format!("{:.2}%", v));
        vec![
            ("Option".to_string(), self.name.clone()),
            (
                "Purchase Date".to_string(),
                self.purchase_date.format("%m/%d/%Y").to_string(),
            ),
            ("Property Value".to_string(), format_money(self.property_value)),
            ("Down Payment".to_string(), format_money(self.down_payment)),
            ("Loan Amount".to_string(), format_money(self.loan_amount)),
            ("Monthly Payment".to_string(), format_money(self.monthly_payment)),
            ("Closing Costs".to_string(), format_money(self.closing_costs)),
            (
                "Total Investment".to_string(),
                format_money(self.total_investment),
            ),
            (
                "Final Property Value".to_string(),
                format_money(self.final_property_value),
            ),
            ("Total Return".to_string(), format_money(self.total_return)),
            (
                format!("NPV ({:.2}%)", self.discount_rate_pct),
                format_money(self.npv),
            ),
            ("IRR".to_string(), pct_or_na(self.irr_pct)),
            ("ROI".to_string(), pct_or_na(self.roi_pct)),
            ("Payback (years)".to_string(), self.payback_years.to_string()),
            ("Cap Rate".to_string(), pct_or_na(self.cap_rate_pct)),
            ("Cash-on-Cash".to_string(), pct_or_na(self.cash_on_cash_pct)),
        ]
    }
}

/// Complete result of one purchase scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResult {
    pub rows: Vec<PurchaseRow>,
    pub cash_flows: Vec<f64>,
    pub summary: PurchaseSummary,
}

/// Monthly mortgage payment for a level-payment amortizing loan
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    if loan_amount <= 0.0 || term_years == 0 {
        return 0.0;
    }
    let n = (term_years * 12) as f64;
    let r = annual_rate_pct / 100.0 / 12.0;
    if r.abs() < 1e-12 {
        return loan_amount / n;
    }
    loan_amount * r / (1.0 - (1.0 + r).powf(-n))
}

/// Analyze a purchase scenario: yearly cash-flow rows plus summary metrics
///
/// Year 0 carries the down payment and closing costs alongside the first
/// year of operations. Tolerant like the lease engine: undefined metrics
/// come back as `None`, never as an error.
pub fn analyze_purchase(params: &PurchaseParams) -> PurchaseResult {
    debug!(
        "analyzing purchase '{}': value {:.0}, {} yr hold",
        params.name, params.property_value, params.holding_period_years
    );

    let down_payment = params.down_payment();
    let loan_amount = params.loan_amount();
    let closing_costs = params.closing_costs();
    let payment = monthly_payment(loan_amount, params.interest_rate_pct, params.loan_term_years);
    let monthly_rate = params.interest_rate_pct / 100.0 / 12.0;

    let mut rows = Vec::new();
    let mut cash_flows = Vec::new();
    let mut remaining_balance = loan_amount;

    for year in 0..=params.holding_period_years {
        let appreciation = (1.0 + params.annual_appreciation_pct / 100.0).powi(year as i32);
        let property_value = params.property_value * appreciation;
        let rental_income = params.annual_rental_income
            * (1.0 + params.annual_rental_increase_pct / 100.0).powi(year as i32);
        let operating_expenses = params.annual_expenses();

        let in_loan_term = year < params.loan_term_years;
        let mortgage_payments = if in_loan_term { payment * 12.0 } else { 0.0 };

        let (mut principal_paid, mut interest_paid) = (0.0, 0.0);
        if in_loan_term {
            for _ in 0..12 {
                let interest = remaining_balance * monthly_rate;
                let principal = payment - interest;
                interest_paid += interest;
                principal_paid += principal;
                remaining_balance -= principal;
            }
        }

        let mut net_cash_flow = rental_income - operating_expenses - mortgage_payments;
        if year == 0 {
            net_cash_flow -= down_payment + closing_costs;
        }

        let cumulative_equity = if in_loan_term {
            down_payment + (loan_amount - remaining_balance)
        } else {
            property_value
        };

        let start = add_months(params.purchase_date, 12 * year);
        let end = add_months(start, 12).pred_opt().unwrap_or(start);

        cash_flows.push(net_cash_flow);
        rows.push(PurchaseRow {
            year,
            start,
            end,
            property_value,
            rental_income,
            operating_expenses,
            mortgage_payments,
            principal_paid,
            interest_paid,
            net_cash_flow,
            cumulative_equity,
        });
    }

    let total_investment = down_payment + closing_costs;
    let final_property_value = params.property_value
        * (1.0 + params.annual_appreciation_pct / 100.0).powi(params.holding_period_years as i32);
    let operating_sum: f64 = cash_flows.iter().skip(1).sum();
    let total_return = final_property_value - total_investment + operating_sum;

    let npv = irr::npv(params.discount_rate_pct / 100.0, &cash_flows);
    let irr_pct = irr::irr(&cash_flows).map(|rate| rate * 100.0);

    let roi_pct = if total_investment > 0.0 {
        Some(total_return / total_investment * 100.0)
    } else {
        None
    };

    // First year whose cumulative cash flow turns non-negative
    let mut cumulative = 0.0;
    let payback_years = cash_flows
        .iter()
        .position(|&cf| {
            cumulative += cf;
            cumulative >= 0.0
        })
        .map(|i| i as u32)
        .unwrap_or(params.holding_period_years);

    let cap_rate_pct = if params.property_value > 0.0 {
        Some(params.annual_rental_income / params.property_value * 100.0)
    } else {
        None
    };

    let cash_on_cash_pct = if total_investment > 0.0 {
        Some(
            (params.annual_rental_income - params.annual_expenses() - payment * 12.0)
                / total_investment
                * 100.0,
        )
    } else {
        None
    };

    let summary = PurchaseSummary {
        name: params.name.clone(),
        purchase_date: params.purchase_date,
        property_value: params.property_value,
        down_payment,
        loan_amount,
        monthly_payment: payment,
        closing_costs,
        total_investment,
        final_property_value,
        total_return,
        npv: npv.abs(),
        discount_rate_pct: params.discount_rate_pct,
        irr_pct,
        roi_pct,
        payback_years,
        cap_rate_pct,
        cash_on_cash_pct,
    };

    PurchaseResult {
        rows,
        cash_flows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rental_params() -> PurchaseParams {
        PurchaseParams {
            property_value: 1_000_000.0,
            down_payment_pct: 25.0,
            loan_term_years: 30,
            interest_rate_pct: 6.0,
            holding_period_years: 10,
            annual_appreciation_pct: 3.0,
            annual_rental_income: 90_000.0,
            annual_rental_increase_pct: 2.0,
            annual_property_tax: 12_000.0,
            annual_insurance: 4_000.0,
            annual_maintenance: 6_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_monthly_payment_standard_loan() {
        // $100k at 6% over 30 years: $599.55/mo
        let payment = monthly_payment(100_000.0, 6.0, 30);
        assert_relative_eq!(payment, 599.55, epsilon = 0.01);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        assert_relative_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
    }

    #[test]
    fn test_monthly_payment_no_loan() {
        assert_eq!(monthly_payment(0.0, 6.0, 30), 0.0);
        assert_eq!(monthly_payment(-5.0, 6.0, 30), 0.0);
    }

    #[test]
    fn test_row_count_and_year_zero_outlay() {
        let result = analyze_purchase(&rental_params());
        assert_eq!(result.rows.len(), 11); // years 0..=10

        let params = rental_params();
        let year0 = &result.rows[0];
        let operations = year0.rental_income - year0.operating_expenses - year0.mortgage_payments;
        assert_relative_eq!(
            year0.net_cash_flow,
            operations - params.down_payment() - params.closing_costs(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_amortization_reduces_interest_over_time() {
        let result = analyze_purchase(&rental_params());
        let first = &result.rows[0];
        let later = &result.rows[9];

        assert!(later.interest_paid < first.interest_paid);
        assert!(later.principal_paid > first.principal_paid);
        // Every in-term year pays the same total debt service
        assert_relative_eq!(
            first.principal_paid + first.interest_paid,
            later.principal_paid + later.interest_paid,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_equity_grows_during_loan_term() {
        let result = analyze_purchase(&rental_params());
        for pair in result.rows.windows(2) {
            assert!(pair[1].cumulative_equity > pair[0].cumulative_equity);
        }
    }

    #[test]
    fn test_appreciation_compounds() {
        let result = analyze_purchase(&rental_params());
        assert_relative_eq!(result.rows[0].property_value, 1_000_000.0);
        assert_relative_eq!(
            result.rows[10].property_value,
            1_000_000.0 * 1.03_f64.powi(10)
        );
        assert_relative_eq!(
            result.summary.final_property_value,
            result.rows[10].property_value
        );
    }

    #[test]
    fn test_cap_rate() {
        let result = analyze_purchase(&rental_params());
        assert_relative_eq!(result.summary.cap_rate_pct.unwrap(), 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_irr_defined_for_income_property() {
        // Strong income against a modest outlay: the series flips sign
        let params = PurchaseParams {
            annual_rental_income: 150_000.0,
            ..rental_params()
        };
        let result = analyze_purchase(&params);
        assert!(result.summary.irr_pct.is_some());
    }

    #[test]
    fn test_npv_zero_discount_is_plain_sum() {
        let result = analyze_purchase(&rental_params());
        let sum: f64 = result.cash_flows.iter().sum();
        assert_relative_eq!(result.summary.npv, sum.abs(), epsilon = 1e-6);
    }

    #[test]
    fn test_display_map_has_original_keys() {
        let result = analyze_purchase(&rental_params());
        let keys: Vec<String> = result
            .summary
            .display_map()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(keys.contains(&"Monthly Payment".to_string()));
        assert!(keys.contains(&"Cap Rate".to_string()));
        assert!(keys.contains(&"NPV (0.00%)".to_string()));
    }
}
