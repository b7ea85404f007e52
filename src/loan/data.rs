//! Loan parameter records and boundary clamping

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{LoanError, LoanResult};

/// Default loan amount shown by every calculator on reset
pub const DEFAULT_PRINCIPAL: f64 = 300_000.0;
/// Default annual rate (percent)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 6.5;
/// Default term for repayment and amortization (years)
pub const DEFAULT_TERM_YEARS: u32 = 30;
/// Default remaining term for refinance comparison (years)
pub const DEFAULT_REMAINING_YEARS: u32 = 25;
/// Default candidate rate for refinance comparison (percent)
pub const DEFAULT_NEW_RATE_PERCENT: f64 = 5.5;
/// Default flat refinancing cost
pub const DEFAULT_REFINANCING_COST: f64 = 5_000.0;
/// Longest term the calculators accept (years)
pub const MAX_TERM_YEARS: u32 = 50;

/// Clamp a currency amount or rate to a finite, non-negative value
pub(crate) fn clamp_non_negative(field: &str, value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        if value != 0.0 {
            warn!("{} = {} clamped to 0", field, value);
        }
        0.0
    }
}

/// Clamp a term in years to [1, MAX_TERM_YEARS]
pub(crate) fn clamp_term(field: &str, years: i64) -> u32 {
    let max = i64::from(MAX_TERM_YEARS);
    let limited = years.clamp(1, max);
    if limited != years {
        warn!("{} = {} clamped to {}", field, years, limited);
    }
    // within [1, MAX_TERM_YEARS]
    limited as u32
}

fn check_amount(field: &str, value: f64) -> LoanResult<f64> {
    if !value.is_finite() {
        return Err(LoanError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(LoanError::invalid(field, "must be >= 0"));
    }
    Ok(value)
}

fn check_term(field: &str, years: i64) -> LoanResult<u32> {
    if years <= 0 {
        return Err(LoanError::invalid(field, "must be at least 1 year"));
    }
    if years > i64::from(MAX_TERM_YEARS) {
        return Err(LoanError::invalid(
            field,
            format!("must be at most {} years", MAX_TERM_YEARS),
        ));
    }
    Ok(years as u32)
}

/// Inputs shared by the repayment and amortization calculators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount in currency units
    pub principal: f64,

    /// Annual rate as a percentage (6.5 means 6.5%)
    pub annual_rate_percent: f64,

    /// Term in whole years, 1 to MAX_TERM_YEARS
    pub term_years: u32,
}

impl LoanParameters {
    /// Build parameters, clamping every field into the engine's domain
    pub fn clamped(principal: f64, annual_rate_percent: f64, term_years: i64) -> Self {
        Self {
            principal: clamp_non_negative("principal", principal),
            annual_rate_percent: clamp_non_negative("annual_rate_percent", annual_rate_percent),
            term_years: clamp_term("term_years", term_years),
        }
    }

    /// Build parameters, rejecting anything outside the engine's domain
    pub fn try_new(principal: f64, annual_rate_percent: f64, term_years: i64) -> LoanResult<Self> {
        Ok(Self {
            principal: check_amount("principal", principal)?,
            annual_rate_percent: check_amount("annual_rate_percent", annual_rate_percent)?,
            term_years: check_term("term_years", term_years)?,
        })
    }

    /// Total number of monthly payments
    pub fn number_of_payments(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    /// Month within the loan year (1-12) for a given payment month
    pub fn month_in_loan_year(&self, month_index: u32) -> u32 {
        (month_index.saturating_sub(1) % 12) + 1
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
        }
    }
}

/// Inputs for comparing an existing loan against a refinance offer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinanceParameters {
    /// Outstanding balance on the existing loan
    pub current_balance: f64,

    /// Existing annual rate (percent)
    pub current_rate_percent: f64,

    /// Years left on the existing loan (1 to MAX_TERM_YEARS); the new loan keeps the same term
    pub remaining_years: u32,

    /// Offered annual rate (percent)
    pub new_rate_percent: f64,

    /// One-time closing cost of refinancing
    pub refinancing_cost: f64,
}

impl RefinanceParameters {
    pub fn clamped(
        current_balance: f64,
        current_rate_percent: f64,
        remaining_years: i64,
        new_rate_percent: f64,
        refinancing_cost: f64,
    ) -> Self {
        Self {
            current_balance: clamp_non_negative("current_balance", current_balance),
            current_rate_percent: clamp_non_negative("current_rate_percent", current_rate_percent),
            remaining_years: clamp_term("remaining_years", remaining_years),
            new_rate_percent: clamp_non_negative("new_rate_percent", new_rate_percent),
            refinancing_cost: clamp_non_negative("refinancing_cost", refinancing_cost),
        }
    }

    pub fn try_new(
        current_balance: f64,
        current_rate_percent: f64,
        remaining_years: i64,
        new_rate_percent: f64,
        refinancing_cost: f64,
    ) -> LoanResult<Self> {
        Ok(Self {
            current_balance: check_amount("current_balance", current_balance)?,
            current_rate_percent: check_amount("current_rate_percent", current_rate_percent)?,
            remaining_years: check_term("remaining_years", remaining_years)?,
            new_rate_percent: check_amount("new_rate_percent", new_rate_percent)?,
            refinancing_cost: check_amount("refinancing_cost", refinancing_cost)?,
        })
    }

    /// Remaining term in months
    pub fn remaining_months(&self) -> u32 {
        self.remaining_years.saturating_mul(12)
    }

    /// The same comparison with a different offered rate
    pub fn with_new_rate(&self, new_rate_percent: f64) -> Self {
        Self {
            new_rate_percent: clamp_non_negative("new_rate_percent", new_rate_percent),
            ..*self
        }
    }
}

impl Default for RefinanceParameters {
    fn default() -> Self {
        Self {
            current_balance: DEFAULT_PRINCIPAL,
            current_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            remaining_years: DEFAULT_REMAINING_YEARS,
            new_rate_percent: DEFAULT_NEW_RATE_PERCENT,
            refinancing_cost: DEFAULT_REFINANCING_COST,
        }
    }
}
