use approx::{assert_abs_diff_eq, assert_relative_eq};

use loan_calculator::amortization::{BalanceMethod, Sampling};
use loan_calculator::calculator::monthly_payment;
use loan_calculator::loan::{load_scenarios_from_reader, parse_amount, parse_term};
use loan_calculator::{
    compute_amortization_schedule, compute_refinance, compute_repayment, AmortizationEngine,
    LoanError, LoanParameters, RefinanceParameters, ScenarioRunner, ScheduleConfig,
};

static PRINCIPALS: [f64; 4] = [0.0, 15_000.0, 300_000.0, 1_000_000.0];
static RATES: [f64; 5] = [0.0, 2.75, 6.5, 12.0, 20.0];
static TERMS: [i64; 5] = [1, 7, 15, 30, 50];

fn all_loans() -> impl Iterator<Item = LoanParameters> {
    PRINCIPALS.iter().flat_map(|&p| {
        RATES
            .iter()
            .flat_map(move |&r| TERMS.iter().map(move |&y| LoanParameters::clamped(p, r, y)))
    })
}

#[test]
fn payment_is_never_negative() {
    for params in all_loans() {
        let pmt = monthly_payment(params.principal, params.annual_rate_percent, params.term_years);
        assert!(pmt >= 0.0, "{:?} produced {}", params, pmt);
    }
}

#[test]
fn vanishing_rates_still_amortize() {
    for &rate in &[1e-15, 1e-9, 1e-6] {
        for &years in &TERMS {
            let params = LoanParameters::clamped(300_000.0, rate, years);
            let repayment = compute_repayment(&params);
            assert!(repayment.monthly_payment.is_finite() && repayment.monthly_payment > 0.0);
            assert!(repayment.total_interest >= -1e-6, "{:?} gave {}", params, repayment.total_interest);

            let schedule = compute_amortization_schedule(&params);
            assert!(schedule.final_balance() < 0.01);
        }
    }
}

#[test]
fn oversized_terms_are_capped() {
    let params = LoanParameters::clamped(300_000.0, 6.5, 400_000_000);
    assert_eq!(params, LoanParameters::clamped(300_000.0, 6.5, 50));

    let result = compute_amortization_schedule(&params);
    assert_eq!(result.schedule.len(), 50);
    assert!(result.monthly_payment > 0.0);

    let err = LoanParameters::try_new(300_000.0, 6.5, 200_000_000).unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { ref field, .. } if field == "term_years"));
}

#[test]
fn total_payment_is_payment_times_months() {
    for params in all_loans() {
        let result = compute_repayment(&params);
        let months = f64::from(params.term_years * 12);
        assert_relative_eq!(result.total_payment, result.monthly_payment * months);
    }
}

#[test]
fn zero_rate_is_straight_line_without_interest() {
    for &years in &TERMS {
        let params = LoanParameters::clamped(300_000.0, 0.0, years);
        let result = compute_repayment(&params);
        assert_relative_eq!(result.monthly_payment, 300_000.0 / (years as f64 * 12.0));
        assert_eq!(result.total_interest, 0.0);
    }
}

#[test]
fn schedule_pays_off_loan() {
    for params in all_loans() {
        let result = compute_amortization_schedule(&params);
        assert_eq!(result.schedule.len(), params.term_years as usize);
        assert!(result.final_balance() < 0.01, "{:?} left {}", params, result.final_balance());
        assert!(result.schedule.iter().all(|e| e.remaining_balance >= 0.0));
    }
}

#[test]
fn monthly_interest_reconstructs_total() {
    let engine = AmortizationEngine::new(ScheduleConfig {
        sampling: Sampling::Monthly,
        balance_method: BalanceMethod::Iterative,
    });

    for params in all_loans() {
        let result = engine.project(&params);
        let summed: f64 = result.schedule.iter().map(|e| e.interest_portion).sum();
        assert_abs_diff_eq!(summed, result.total_interest, epsilon = 1e-6);
    }
}

#[test]
fn repayment_and_schedule_agree_on_interest() {
    let params = LoanParameters::default();
    let repayment = compute_repayment(&params);
    let schedule = compute_amortization_schedule(&params);

    assert_relative_eq!(repayment.monthly_payment, schedule.monthly_payment);
    assert_abs_diff_eq!(repayment.total_interest, schedule.total_interest, epsilon = 0.01);
}

#[test]
fn refinance_at_same_rate_only_costs_closing() {
    for &rate in &RATES {
        let params = RefinanceParameters::clamped(250_000.0, rate, 20, rate, 3_500.0);
        let result = compute_refinance(&params);
        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.total_savings, -3_500.0);
        assert_eq!(result.break_even_months, 240);
    }
}

#[test]
fn break_even_never_exceeds_remaining_term() {
    for &current in &RATES {
        for &new in &RATES {
            for &years in &TERMS {
                for &cost in &[0.0, 500.0, 5_000.0, 250_000.0] {
                    let params = RefinanceParameters::clamped(300_000.0, current, years, new, cost);
                    let result = compute_refinance(&params);
                    assert!(result.break_even_months <= params.remaining_months());
                }
            }
        }
    }
}

#[test]
fn scenario_standard_mortgage() {
    let params = LoanParameters::clamped(300_000.0, 6.5, 30);
    assert_abs_diff_eq!(compute_repayment(&params).monthly_payment, 1896.20, epsilon = 0.01);
}

#[test]
fn scenario_interest_free_mortgage() {
    let params = LoanParameters::clamped(300_000.0, 0.0, 30);
    let result = compute_repayment(&params);
    assert_eq!(result.monthly_payment, 300_000.0 / 360.0);
    assert_abs_diff_eq!(result.monthly_payment, 833.33, epsilon = 0.005);
    assert_eq!(result.total_interest, 0.0);
}

#[test]
fn scenario_default_refinance() {
    let params = RefinanceParameters::clamped(300_000.0, 6.5, 25, 5.5, 5_000.0);
    let result = compute_refinance(&params);

    assert!(result.monthly_savings > 0.0);
    assert!(result.total_savings > 0.0);
    assert_eq!(result.break_even_months, (5_000.0 / result.monthly_savings).ceil() as u32);
    assert!(result.break_even_months <= 300);
}

#[test]
fn scenario_one_year_schedule() {
    let params = LoanParameters::clamped(120_000.0, 4.0, 1);
    let result = compute_amortization_schedule(&params);

    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.schedule[0].month_index, 12);
    assert_abs_diff_eq!(result.schedule[0].remaining_balance, 0.0, epsilon = 0.01);
}

#[test]
fn text_input_is_clamped_before_the_engine() {
    let params = LoanParameters::clamped(parse_amount("lots"), parse_amount("-3"), parse_term("zero"));
    assert_eq!(params, LoanParameters { principal: 0.0, annual_rate_percent: 0.0, term_years: 1 });

    let result = compute_repayment(&params);
    assert_eq!(result.monthly_payment, 0.0);
    assert_eq!(result.total_interest, 0.0);
}

#[test]
fn unclamped_input_reports_invalid_input() {
    let err = LoanParameters::try_new(100_000.0, 5.0, 0).unwrap_err();
    assert!(matches!(err, LoanError::InvalidInput { ref field, .. } if field == "term_years"));
    assert!(err.to_string().contains("term_years"));
}

#[test]
fn batch_from_csv() {
    let data = "\
ScenarioId,Principal,RatePercent,TermYears
10,300000,6.5,30
11,300000,0,30
12,120000,4,1
";
    let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
    let results = ScenarioRunner::new().run_batch(&scenarios);

    let ids: Vec<u32> = results.iter().map(|r| r.scenario_id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_abs_diff_eq!(results[0].repayment.monthly_payment, 1896.20, epsilon = 0.01);
    assert_eq!(results[1].repayment.total_interest, 0.0);
    assert_eq!(results[2].amortization.schedule.len(), 1);

    let json = serde_json::to_string(&results[0]).unwrap();
    assert!(json.contains("\"monthly_payment\""));
}
