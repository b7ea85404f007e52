//! Repayment calculator: payment and lifetime cost of a single loan

use log::debug;
use serde::{Deserialize, Serialize};

use super::annuity;
use crate::loan::LoanParameters;

/// Lifetime cost of a loan at a fixed rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Compute the monthly payment, total paid and total interest for a loan
pub fn compute_repayment(params: &LoanParameters) -> RepaymentResult {
    let n_payments = params.number_of_payments();
    let monthly_payment =
        annuity::monthly_payment(params.principal, params.annual_rate_percent, params.term_years);
    let total_payment = monthly_payment * n_payments as f64;

    // Zero rate reports exactly zero interest rather than P/n*n - P residue
    let total_interest = if annuity::monthly_rate(params.annual_rate_percent) == 0.0 {
        0.0
    } else {
        total_payment - params.principal
    };

    debug!(
        "repayment: principal={} rate={}% years={} -> payment={:.4}",
        params.principal, params.annual_rate_percent, params.term_years, monthly_payment
    );

    RepaymentResult {
        monthly_payment,
        total_payment,
        total_interest,
    }
}
