//! Running state of a loan during schedule simulation

use crate::loan::LoanParameters;

/// Loan position at a point in the simulation
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current payment month (1-indexed, 0 before the first payment)
    pub month_index: u32,

    /// Month within loan year (1-12)
    pub month_in_loan_year: u32,

    /// Balance before this month's payment
    pub bop_balance: f64,

    /// Balance after this month's payment (may dip slightly below zero from rounding)
    pub eop_balance: f64,

    /// Interest paid so far
    pub cumulative_interest: f64,

    /// Principal repaid so far
    pub cumulative_principal: f64,
}

impl AmortizationState {
    /// State before the first payment
    pub fn from_loan(params: &LoanParameters) -> Self {
        Self {
            month_index: 0,
            month_in_loan_year: 0,
            bop_balance: params.principal,
            eop_balance: params.principal,
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
        }
    }

    /// Advance to the next payment month; opening balance is the prior closing balance
    pub fn advance_month(&mut self, params: &LoanParameters) {
        self.month_index += 1;
        self.month_in_loan_year = params.month_in_loan_year(self.month_index);
        self.bop_balance = self.eop_balance;
    }

    /// Book one payment split into its interest and principal parts
    pub fn apply_payment(&mut self, interest: f64, principal: f64) {
        self.eop_balance = self.bop_balance - principal;
        self.cumulative_interest += interest;
        self.cumulative_principal += principal;
    }

    /// Closing balance as reported; never negative
    pub fn reported_balance(&self) -> f64 {
        self.eop_balance.max(0.0)
    }

    /// True at a loan-year boundary
    pub fn is_year_end(&self) -> bool {
        self.month_in_loan_year == 12
    }
}
