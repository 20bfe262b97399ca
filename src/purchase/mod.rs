//! Property purchase analysis: mortgage amortization, yearly cash flows,
//! and investment metrics (NPV, IRR, ROI, cap rate, cash-on-cash)

pub mod calculator;
pub mod params;

pub use calculator::{analyze_purchase, monthly_payment, PurchaseResult, PurchaseRow, PurchaseSummary};
pub use params::PurchaseParams;
