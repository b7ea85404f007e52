//! Sweep a refinance comparison across a grid of offered rates
//!
//! Writes one CSV row per candidate rate to stdout, or JSON with --json.
//! Accepts config via environment variables:
//!   SWEEP_BALANCE, SWEEP_CURRENT_RATE, SWEEP_REMAINING_YEARS, SWEEP_COST,
//!   SWEEP_MIN_RATE, SWEEP_MAX_RATE, SWEEP_STEP
//! Unset variables fall back to the refinance calculator defaults.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::env;
use std::io;
use std::time::Instant;

use loan_calculator::calculator::{rate_grid, refinance_rate_sweep};
use loan_calculator::loan::{parse_amount, parse_term, RefinanceParameters};

#[derive(Serialize)]
struct SweepRow {
    new_rate_percent: f64,
    current_monthly_payment: f64,
    new_monthly_payment: f64,
    monthly_savings: f64,
    total_savings: f64,
    break_even_months: u32,
    beneficial: bool,
}

fn env_amount(name: &str, default: f64) -> f64 {
    env::var(name).map(|v| parse_amount(&v)).unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let json_output = env::args().any(|arg| arg == "--json");

    let defaults = RefinanceParameters::default();
    let remaining_years = env::var("SWEEP_REMAINING_YEARS")
        .map(|v| parse_term(&v))
        .unwrap_or(i64::from(defaults.remaining_years));

    let params = RefinanceParameters::clamped(
        env_amount("SWEEP_BALANCE", defaults.current_balance),
        env_amount("SWEEP_CURRENT_RATE", defaults.current_rate_percent),
        remaining_years,
        defaults.new_rate_percent,
        env_amount("SWEEP_COST", defaults.refinancing_cost),
    );

    let min_rate = env_amount("SWEEP_MIN_RATE", 3.0);
    let max_rate = env_amount("SWEEP_MAX_RATE", params.current_rate_percent);
    let step = env_amount("SWEEP_STEP", 0.25);

    let rates = rate_grid(min_rate, max_rate, step).context("invalid SWEEP_* rate grid")?;

    let rows: Vec<SweepRow> = refinance_rate_sweep(&params, &rates)
        .into_iter()
        .map(|(rate, result)| SweepRow {
            new_rate_percent: rate,
            current_monthly_payment: result.current_monthly_payment,
            new_monthly_payment: result.new_monthly_payment,
            monthly_savings: result.monthly_savings,
            total_savings: result.total_savings,
            break_even_months: result.break_even_months,
            beneficial: result.is_beneficial(),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let mut writer = csv::Writer::from_writer(io::stdout());
        for row in &rows {
            writer.serialize(row).context("failed to write sweep row")?;
        }
        writer.flush()?;
    }

    info!("Swept {} rates in {:?}", rows.len(), start.elapsed());
    Ok(())
}
