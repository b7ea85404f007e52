//! Loan inputs, form bounds and scenario loading

mod data;
mod bounds;
pub mod loader;

pub use data::{
    LoanParameters, RefinanceParameters, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_NEW_RATE_PERCENT,
    DEFAULT_PRINCIPAL, DEFAULT_REFINANCING_COST, DEFAULT_REMAINING_YEARS, DEFAULT_TERM_YEARS,
    MAX_TERM_YEARS,
};
pub use bounds::{parse_amount, parse_term, InputBounds};
pub use loader::{load_scenarios, load_scenarios_from_reader, LoanScenario};
