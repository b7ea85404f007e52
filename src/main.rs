//! Loan Calculator CLI
//!
//! Command-line front end for the repayment, refinance and amortization calculators

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use serde::Serialize;

use loan_calculator::amortization::{AmortizationEngine, BalanceMethod, Sampling, ScheduleConfig};
use loan_calculator::calculator::{compute_refinance, compute_repayment};
use loan_calculator::format::format_currency;
use loan_calculator::loan::{
    load_scenarios, parse_amount, parse_term, LoanParameters, RefinanceParameters,
};
use loan_calculator::scenario::ScenarioRunner;

/// Loan repayment, refinance and amortization calculators
#[derive(Parser)]
#[command(name = "loan_calculator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment, total paid and total interest for a loan
    Repayment(LoanArgs),
    /// Year-by-year amortization schedule
    Amortization(AmortizationArgs),
    /// Compare the current loan against a refinance offer
    Refinance(RefinanceArgs),
    /// Run every loan in a CSV file (ScenarioId,Principal,RatePercent,TermYears)
    Batch {
        /// Path to the scenario CSV
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn amount(text: &str) -> Result<f64, String> {
    Ok(parse_amount(text))
}

fn term(text: &str) -> Result<i64, String> {
    Ok(parse_term(text))
}

#[derive(Args)]
struct LoanArgs {
    /// Loan amount
    #[arg(long, env = "LOAN_PRINCIPAL", default_value = "300000", value_parser = amount, allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, env = "LOAN_RATE", default_value = "6.5", value_parser = amount, allow_negative_numbers = true)]
    rate: f64,

    /// Loan term in years
    #[arg(long, env = "LOAN_TERM_YEARS", default_value = "30", value_parser = term, allow_negative_numbers = true)]
    years: i64,
}

impl LoanArgs {
    fn params(&self) -> LoanParameters {
        LoanParameters::clamped(self.principal, self.rate, self.years)
    }
}

#[derive(Args)]
struct AmortizationArgs {
    #[command(flatten)]
    loan: LoanArgs,

    /// Emit every month instead of one row per year
    #[arg(long)]
    monthly: bool,

    /// Recompute balances from the closed-form annuity formula
    #[arg(long)]
    closed_form: bool,
}

#[derive(Args)]
struct RefinanceArgs {
    /// Current loan balance
    #[arg(long, default_value = "300000", value_parser = amount, allow_negative_numbers = true)]
    balance: f64,

    /// Current annual rate in percent
    #[arg(long, default_value = "6.5", value_parser = amount, allow_negative_numbers = true)]
    current_rate: f64,

    /// Remaining term in years
    #[arg(long, default_value = "25", value_parser = term, allow_negative_numbers = true)]
    remaining_years: i64,

    /// Offered annual rate in percent
    #[arg(long, default_value = "5.5", value_parser = amount, allow_negative_numbers = true)]
    new_rate: f64,

    /// One-time refinancing cost
    #[arg(long, default_value = "5000", value_parser = amount, allow_negative_numbers = true)]
    cost: f64,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Repayment(args) => {
            let result = compute_repayment(&args.params());
            match cli.output {
                OutputFormat::Text => println!("{}", result),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => write_csv(std::iter::once(result))?,
            }
        }
        Commands::Amortization(args) => {
            let config = ScheduleConfig {
                sampling: if args.monthly { Sampling::Monthly } else { Sampling::Annual },
                balance_method: if args.closed_form {
                    BalanceMethod::ClosedForm
                } else {
                    BalanceMethod::Iterative
                },
            };
            let engine = AmortizationEngine::new(config);
            debug!("schedule config: {:?}", engine.config());

            let result = engine.project(&args.loan.params());
            match cli.output {
                OutputFormat::Text => println!("{}", result),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => write_csv(result.schedule.iter())?,
            }
        }
        Commands::Refinance(args) => {
            let params = RefinanceParameters::clamped(
                args.balance,
                args.current_rate,
                args.remaining_years,
                args.new_rate,
                args.cost,
            );
            let result = compute_refinance(&params);
            match cli.output {
                OutputFormat::Text => println!("{}", result),
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Csv => write_csv(std::iter::once(result))?,
            }
        }
        Commands::Batch { path } => {
            let scenarios = load_scenarios(&path)
                .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
            let results = ScenarioRunner::new().run_batch(&scenarios);

            match cli.output {
                OutputFormat::Text => {
                    println!(
                        "{:>8} {:>14} {:>7} {:>5} {:>12} {:>14}",
                        "Scenario", "Principal", "Rate", "Years", "Payment", "Interest"
                    );
                    println!("{}", "-".repeat(65));
                    for result in &results {
                        let row = result.summary_row();
                        println!(
                            "{:>8} {:>14} {:>6.2}% {:>5} {:>12} {:>14}",
                            row.scenario_id,
                            format_currency(row.principal, 0),
                            row.rate_percent,
                            row.term_years,
                            format_currency(row.monthly_payment, 2),
                            format_currency(row.total_interest, 0),
                        );
                    }
                }
                OutputFormat::Json => print_json(&results)?,
                OutputFormat::Csv => write_csv(results.iter().map(|r| r.summary_row()))?,
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{}", json);
    Ok(())
}

fn write_csv<T, I>(rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(io::stdout());
    for row in rows {
        writer.serialize(row).context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}
