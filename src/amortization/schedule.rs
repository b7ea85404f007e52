//! Schedule output structures

use serde::{Deserialize, Serialize};

/// One sampled row of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationScheduleEntry {
    /// Payment month this row describes (1-indexed)
    pub month_index: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,

    /// Balance after the payment, clamped to >= 0
    pub remaining_balance: f64,
}

impl AmortizationScheduleEntry {
    /// Loan year the row closes (month 12 -> year 1, month 13 -> year 2)
    pub fn year(&self) -> u32 {
        self.month_index.div_ceil(12)
    }
}

/// Full amortization result for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_payment: f64,

    /// Interest summed over every simulated month, not just the sampled rows
    pub total_interest: f64,

    /// Principal repaid over every simulated month
    pub total_principal: f64,

    pub schedule: Vec<AmortizationScheduleEntry>,

    /// Number of payments simulated
    pub number_of_payments: u32,
}

impl AmortizationResult {
    pub(crate) fn new(monthly_payment: f64, number_of_payments: u32) -> Self {
        Self {
            monthly_payment,
            total_interest: 0.0,
            total_principal: 0.0,
            schedule: Vec::new(),
            number_of_payments,
        }
    }

    pub(crate) fn add_entry(&mut self, entry: AmortizationScheduleEntry) {
        self.schedule.push(entry);
    }

    /// Total paid over the life of the loan
    pub fn total_payment(&self) -> f64 {
        self.monthly_payment * self.number_of_payments as f64
    }

    /// Balance on the last sampled row
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|e| e.remaining_balance).unwrap_or(0.0)
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            entries: self.schedule.len(),
            number_of_payments: self.number_of_payments,
            total_payment: self.total_payment(),
            total_interest: self.total_interest,
            total_principal: self.total_principal,
            final_balance: self.final_balance(),
        }
    }
}

/// Headline figures for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub entries: usize,
    pub number_of_payments: u32,
    pub total_payment: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub final_balance: f64,
}
