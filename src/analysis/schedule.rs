//! Period scheduling: lease term -> ordered annual periods
//!
//! A term of N months splits into `N / 12` full-year periods plus one
//! trailing stub of `N % 12` months. Each period carries a date range and a
//! fraction-of-year weight (1.0 for full years, `extra / 12` for the stub).

use chrono::{Months, NaiveDate};

/// One scheduled period of the lease term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulePeriod {
    /// 0-based period index
    pub index: usize,
    /// First day of the period
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
    /// Fraction of a year this period covers
    pub weight: f64,
}

/// Add calendar months to a date, clamping the day to the target month's
/// length (Jan 31 + 1 month = Feb 28/29)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Build the ordered period schedule for a lease term
///
/// A term under 12 months produces exactly one stub period weighted
/// `term / 12`. The caller clamps the term to a minimum of 1 month before
/// invocation; there are no error paths.
pub fn build_periods(term_months: u32, start_date: NaiveDate) -> Vec<SchedulePeriod> {
    let full_years = term_months / 12;
    let extra_months = term_months % 12;
    let count = full_years as usize + usize::from(extra_months > 0);

    let term_end = add_months(start_date, term_months)
        .pred_opt()
        .unwrap_or(start_date);

    (0..count)
        .map(|i| {
            let start = add_months(start_date, 12 * i as u32);
            if (i as u32) < full_years {
                let end = add_months(start, 12).pred_opt().unwrap_or(start);
                SchedulePeriod {
                    index: i,
                    start,
                    end,
                    weight: 1.0,
                }
            } else {
                SchedulePeriod {
                    index: i,
                    start,
                    end: term_end,
                    weight: extra_months as f64 / 12.0,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_year_term() {
        let periods = build_periods(60, date(2024, 1, 1));
        assert_eq!(periods.len(), 5);
        for (i, p) in periods.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.weight, 1.0);
        }
        assert_eq!(periods[0].start, date(2024, 1, 1));
        assert_eq!(periods[0].end, date(2024, 12, 31));
        assert_eq!(periods[4].start, date(2028, 1, 1));
        assert_eq!(periods[4].end, date(2028, 12, 31));
    }

    #[test]
    fn test_stub_period_66_months() {
        // 5 years 6 months: 6 periods, last weight 0.5
        let periods = build_periods(66, date(2024, 1, 1));
        assert_eq!(periods.len(), 6);
        assert_eq!(periods[5].weight, 0.5);
        assert_eq!(periods[5].start, date(2029, 1, 1));
        // start + 66 months - 1 day
        assert_eq!(periods[5].end, date(2029, 6, 30));
    }

    #[test]
    fn test_short_term_single_stub() {
        let periods = build_periods(7, date(2024, 3, 15));
        assert_eq!(periods.len(), 1);
        assert!((periods[0].weight - 7.0 / 12.0).abs() < 1e-12);
        assert_eq!(periods[0].start, date(2024, 3, 15));
        assert_eq!(periods[0].end, date(2024, 10, 14));
    }

    #[test]
    fn test_month_end_day_clamping() {
        // Jan 31 start: period 2 begins Jan 31 next year, Feb boundary clamps
        let periods = build_periods(24, date(2024, 1, 31));
        assert_eq!(periods[1].start, date(2025, 1, 31));
        assert_eq!(periods[0].end, date(2025, 1, 30));

        let clamped = add_months(date(2024, 1, 31), 1);
        assert_eq!(clamped, date(2024, 2, 29));
    }

    #[test]
    fn test_period_count_is_ceiling_of_years() {
        for term in 1..=120u32 {
            let periods = build_periods(term, date(2024, 6, 1));
            assert_eq!(periods.len() as u32, term.div_ceil(12), "term {}", term);
        }
    }
}
