//! Load loan scenarios from CSV
//!
//! Expected columns: `ScenarioId,Principal,RatePercent,TermYears`.
//! Every row is clamped into the engine's domain on the way in.

use super::LoanParameters;
use crate::error::LoanResult;
use csv::Reader;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioId")]
    scenario_id: u32,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "RatePercent")]
    rate_percent: f64,
    #[serde(rename = "TermYears")]
    term_years: i64,
}

impl CsvRow {
    fn into_scenario(self) -> LoanScenario {
        LoanScenario {
            scenario_id: self.scenario_id,
            params: LoanParameters::clamped(self.principal, self.rate_percent, self.term_years),
        }
    }
}

/// One loan to run through the calculators in a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub scenario_id: u32,
    pub params: LoanParameters,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> LoanResult<Vec<LoanScenario>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load scenarios from any reader (string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> LoanResult<Vec<LoanScenario>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> LoanResult<Vec<LoanScenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    info!("Loaded {} loan scenarios", scenarios.len());
    Ok(scenarios)
}
