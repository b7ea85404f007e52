//! Scenario runner for batch loan calculations
//!
//! Runs the repayment calculator and the amortization engine for many loans
//! at once. Each loan is independent, so batches are spread across threads.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, AmortizationResult, ScheduleConfig};
use crate::calculator::{compute_repayment, RepaymentResult};
use crate::loan::{LoanParameters, LoanScenario};

/// Calculator outputs for one loan scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_id: u32,
    pub params: LoanParameters,
    pub repayment: RepaymentResult,
    pub amortization: AmortizationResult,
}

impl ScenarioResult {
    /// Flatten into a single summary row for tabular output
    pub fn summary_row(&self) -> ScenarioSummaryRow {
        ScenarioSummaryRow {
            scenario_id: self.scenario_id,
            principal: self.params.principal,
            rate_percent: self.params.annual_rate_percent,
            term_years: self.params.term_years,
            monthly_payment: self.repayment.monthly_payment,
            total_payment: self.repayment.total_payment,
            total_interest: self.repayment.total_interest,
            final_balance: self.amortization.final_balance(),
        }
    }
}

/// One line of batch summary output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScenarioSummaryRow {
    pub scenario_id: u32,
    pub principal: f64,
    pub rate_percent: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Runs scenarios against a fixed schedule configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("loans.csv")?;
/// let results = runner.run_batch(&scenarios);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    /// Runner with annual sampling and the running-balance simulation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScheduleConfig) -> Self {
        Self {
            engine: AmortizationEngine::new(config),
        }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &LoanScenario) -> ScenarioResult {
        ScenarioResult {
            scenario_id: scenario.scenario_id,
            params: scenario.params,
            repayment: compute_repayment(&scenario.params),
            amortization: self.engine.project(&scenario.params),
        }
    }

    /// Run many scenarios in parallel; results keep the input order
    pub fn run_batch(&self, scenarios: &[LoanScenario]) -> Vec<ScenarioResult> {
        info!("Running {} loan scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }
}
