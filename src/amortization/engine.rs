//! Month-by-month amortization simulation

use log::debug;

use super::schedule::{AmortizationResult, AmortizationScheduleEntry};
use super::state::AmortizationState;
use crate::calculator::annuity;
use crate::loan::LoanParameters;

/// Which simulated months become schedule rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Every 12th month plus the final month
    #[default]
    Annual,
    /// Every month
    Monthly,
}

/// How the outstanding balance is carried from month to month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceMethod {
    /// Subtract each month's principal from a running balance
    #[default]
    Iterative,
    /// Recompute the balance from the annuity closed form every month
    ClosedForm,
}

/// Configuration for a schedule run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleConfig {
    pub sampling: Sampling,
    pub balance_method: BalanceMethod,
}

/// Amortization schedule engine
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: ScheduleConfig,
}

impl AmortizationEngine {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Simulate every payment of the loan and collect the sampled rows
    pub fn project(&self, params: &LoanParameters) -> AmortizationResult {
        let n_payments = params.number_of_payments();
        let rate = annuity::monthly_rate(params.annual_rate_percent);
        let payment = annuity::payment_for_rate(params.principal, rate, n_payments);

        let mut result = AmortizationResult::new(payment, n_payments);
        let mut state = AmortizationState::from_loan(params);

        for _month in 1..=n_payments {
            state.advance_month(params);

            if self.config.balance_method == BalanceMethod::ClosedForm {
                state.bop_balance =
                    annuity::balance_after(params.principal, rate, payment, state.month_index - 1);
            }

            let interest = state.bop_balance * rate;
            let principal = payment - interest;
            state.apply_payment(interest, principal);

            if self.config.balance_method == BalanceMethod::ClosedForm {
                state.eop_balance =
                    annuity::balance_after(params.principal, rate, payment, state.month_index);
            }

            if self.should_record(&state, n_payments) {
                result.add_entry(AmortizationScheduleEntry {
                    month_index: state.month_index,
                    payment,
                    principal_portion: principal,
                    interest_portion: interest,
                    remaining_balance: state.reported_balance(),
                });
            }
        }

        result.total_interest = state.cumulative_interest;
        result.total_principal = state.cumulative_principal;

        debug!(
            "amortization: {} payments of {:.4}, {} rows, total interest {:.4}, residue {:.3e}",
            n_payments,
            payment,
            result.schedule.len(),
            result.total_interest,
            state.eop_balance
        );

        result
    }

    fn should_record(&self, state: &AmortizationState, n_payments: u32) -> bool {
        match self.config.sampling {
            Sampling::Monthly => true,
            // Both checks coincide for whole-year terms; the final-month check
            // keeps a partial last year from being dropped
            Sampling::Annual => state.is_year_end() || state.month_index == n_payments,
        }
    }
}

/// Annual schedule using the running-balance simulation
pub fn compute_amortization_schedule(params: &LoanParameters) -> AmortizationResult {
    AmortizationEngine::default().project(params)
}
