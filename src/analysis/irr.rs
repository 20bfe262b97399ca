//! NPV and Internal Rate of Return over annual cash-flow series
//!
//! IRR uses Newton-Raphson with a bisection fallback; both return `None`
//! rather than erroring when no root exists or iteration fails to converge.

/// Net present value of an annual cash-flow series at a decimal rate,
/// discounting from t = 0
pub fn npv(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Annual IRR of a cash-flow series as a decimal, or `None` when undefined
///
/// Undefined cases: fewer than 2 periods, no sign change (no root), or
/// non-convergence of both solvers.
pub fn irr(cash_flows: &[f64]) -> Option<f64> {
    if cash_flows.len() < 2 {
        return None;
    }
    if cash_flows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // A root requires at least one sign change
    let has_positive = cash_flows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cash_flows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    newton_raphson(cash_flows).or_else(|| bisection(cash_flows))
}

fn newton_raphson(cash_flows: &[f64]) -> Option<f64> {
    let mut rate = 0.1_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (value, derivative) = npv_and_derivative(cash_flows, rate);
        if derivative.abs() < 1e-20 {
            return None;
        }

        let next = (rate - value / derivative).clamp(-0.99, 10.0);
        if (next - rate).abs() < tolerance {
            return Some(next);
        }
        rate = next;
    }

    None
}

fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        value += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            derivative -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (value, derivative)
}

fn bisection(cash_flows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    if npv(low, cash_flows) * npv(high, cash_flows) > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let value = npv(mid, cash_flows);

        if value.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if value * npv(low, cash_flows) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}
