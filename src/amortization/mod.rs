//! Amortization schedule simulation

mod state;
mod engine;
mod schedule;

pub use state::AmortizationState;
pub use engine::{
    compute_amortization_schedule, AmortizationEngine, BalanceMethod, Sampling, ScheduleConfig,
};
pub use schedule::{AmortizationResult, AmortizationScheduleEntry, ScheduleSummary};
