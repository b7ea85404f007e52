//! Closed-form loan calculators built on the annuity payment primitive

pub mod annuity;
mod repayment;
mod refinance;

pub use annuity::{balance_after, monthly_payment, monthly_rate, number_of_payments, payment_for_rate};
pub use repayment::{compute_repayment, RepaymentResult};
pub use refinance::{compute_refinance, rate_grid, refinance_rate_sweep, RefinanceResult, MAX_SWEEP_RATES};
