//! Loan Calculator - repayment, refinance and amortization engine
//!
//! This library provides:
//! - The fixed-rate annuity payment primitive shared by every calculator
//! - Repayment totals for a single loan
//! - Refinance comparison with savings and break-even month
//! - Month-by-month amortization schedules sampled by year
//! - Input clamping, form bounds and en-US currency formatting
//! - Batch scenario runs from CSV

pub mod error;
pub mod loan;
pub mod calculator;
pub mod amortization;
pub mod format;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoanError, LoanResult};
pub use loan::{LoanParameters, RefinanceParameters, LoanScenario, InputBounds};
pub use calculator::{compute_repayment, compute_refinance, RepaymentResult, RefinanceResult};
pub use amortization::{
    compute_amortization_schedule, AmortizationEngine, AmortizationResult,
    AmortizationScheduleEntry, ScheduleConfig,
};
pub use scenario::ScenarioRunner;
