//! Refinance comparison: existing loan vs. a new rate on the same balance and term

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::annuity;
use crate::error::{LoanError, LoanResult};
use crate::loan::RefinanceParameters;

/// Most candidate rates a single sweep will evaluate
pub const MAX_SWEEP_RATES: usize = 10_000;

/// Outcome of comparing the current loan against a refinance offer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinanceResult {
    pub current_monthly_payment: f64,
    pub new_monthly_payment: f64,

    /// Current minus new payment; negative when refinancing costs more per month
    pub monthly_savings: f64,

    /// Savings over the remaining term net of the refinancing cost
    pub total_savings: f64,

    /// Months of savings needed to recover the cost, capped at the remaining term.
    /// Equal to the remaining term when the new payment saves nothing.
    pub break_even_months: u32,
}

impl RefinanceResult {
    /// Whether refinancing comes out ahead over the remaining term
    pub fn is_beneficial(&self) -> bool {
        self.total_savings > 0.0
    }
}

/// Compare the current loan with the offered rate
pub fn compute_refinance(params: &RefinanceParameters) -> RefinanceResult {
    let remaining_months = params.remaining_months();

    let current_monthly_payment = annuity::monthly_payment(
        params.current_balance,
        params.current_rate_percent,
        params.remaining_years,
    );
    let new_monthly_payment = annuity::monthly_payment(
        params.current_balance,
        params.new_rate_percent,
        params.remaining_years,
    );

    let monthly_savings = current_monthly_payment - new_monthly_payment;
    let total_savings = monthly_savings * remaining_months as f64 - params.refinancing_cost;

    let uncapped_break_even = if monthly_savings > 0.0 {
        // float-to-int casts saturate, so a vanishing saving cannot wrap
        (params.refinancing_cost / monthly_savings).ceil() as u32
    } else {
        remaining_months
    };
    let break_even_months = uncapped_break_even.min(remaining_months);

    debug!(
        "refinance: {}% -> {}% over {}y, savings={:.4}/month, break-even={}",
        params.current_rate_percent,
        params.new_rate_percent,
        params.remaining_years,
        monthly_savings,
        break_even_months
    );

    RefinanceResult {
        current_monthly_payment,
        new_monthly_payment,
        monthly_savings,
        total_savings,
        break_even_months,
    }
}

/// Run the comparison for each candidate new rate, preserving input order
pub fn refinance_rate_sweep(
    params: &RefinanceParameters,
    new_rates_percent: &[f64],
) -> Vec<(f64, RefinanceResult)> {
    new_rates_percent
        .par_iter()
        .map(|&rate| {
            let candidate = params.with_new_rate(rate);
            (candidate.new_rate_percent, compute_refinance(&candidate))
        })
        .collect()
}

/// Evenly spaced candidate rates from `min_percent` up to `max_percent` inclusive
pub fn rate_grid(min_percent: f64, max_percent: f64, step_percent: f64) -> LoanResult<Vec<f64>> {
    if !(step_percent.is_finite() && step_percent > 0.0) {
        return Err(LoanError::invalid("step", format!("must be positive, got {}", step_percent)));
    }
    if !(min_percent.is_finite() && max_percent.is_finite()) || max_percent < min_percent {
        return Err(LoanError::invalid(
            "max_rate",
            format!("{} is below the minimum {}", max_percent, min_percent),
        ));
    }

    let steps = ((max_percent - min_percent) / step_percent + 1e-9).floor();
    if steps >= MAX_SWEEP_RATES as f64 {
        return Err(LoanError::invalid(
            "step",
            format!("{} gives more than {} rates", step_percent, MAX_SWEEP_RATES),
        ));
    }

    // bounded by MAX_SWEEP_RATES above
    let steps = steps as usize;
    Ok((0..=steps).map(|i| min_percent + step_percent * i as f64).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_refinance_is_beneficial() {
        let result = compute_refinance(&RefinanceParameters::default());

        assert_abs_diff_eq!(result.current_monthly_payment, 2025.62, epsilon = 0.01);
        assert_abs_diff_eq!(result.new_monthly_payment, 1842.26, epsilon = 0.01);
        assert!(result.monthly_savings > 0.0);
        assert!(result.total_savings > 0.0);
        assert!(result.is_beneficial());

        let expected = (5_000.0 / result.monthly_savings).ceil() as u32;
        assert_eq!(result.break_even_months, expected);
        assert_eq!(result.break_even_months, 28);
        assert!(result.break_even_months <= 300);
    }

    #[test]
    fn test_same_rate_never_breaks_even() {
        let params = RefinanceParameters::clamped(300_000.0, 6.5, 25, 6.5, 5_000.0);
        let result = compute_refinance(&params);

        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.total_savings, -5_000.0);
        assert_eq!(result.break_even_months, 300);
        assert!(!result.is_beneficial());
    }

    #[test]
    fn test_higher_new_rate_costs_more() {
        let params = RefinanceParameters::clamped(200_000.0, 4.0, 20, 6.0, 2_000.0);
        let result = compute_refinance(&params);

        assert!(result.monthly_savings < 0.0);
        assert!(result.total_savings < -2_000.0);
        assert_eq!(result.break_even_months, 240);
    }

    #[test]
    fn test_break_even_capped_at_remaining_term() {
        // Tiny saving against a large cost
        let params = RefinanceParameters::clamped(50_000.0, 5.0, 2, 4.99, 100_000.0);
        let result = compute_refinance(&params);

        assert!(result.monthly_savings > 0.0);
        assert_eq!(result.break_even_months, 24);
    }

    #[test]
    fn test_free_refinance_breaks_even_immediately() {
        let params = RefinanceParameters::clamped(300_000.0, 6.5, 25, 5.5, 0.0);
        let result = compute_refinance(&params);

        assert_eq!(result.break_even_months, 0);
        assert_relative_eq!(result.total_savings, result.monthly_savings * 300.0);
    }

    #[test]
    fn test_rate_sweep_preserves_order() {
        let params = RefinanceParameters::default();
        let rates = [7.0, 6.5, 6.0, 5.5, 5.0, -1.0];
        let sweep = refinance_rate_sweep(&params, &rates);

        assert_eq!(sweep.len(), rates.len());
        assert_eq!(sweep[0].0, 7.0);
        assert_eq!(sweep[5].0, 0.0);
        assert!(sweep[0].1.monthly_savings < 0.0);
        assert_eq!(sweep[1].1.monthly_savings, 0.0);
        assert_eq!(sweep[3].1, compute_refinance(&params));

        // Lower rates save strictly more
        for pair in sweep.windows(2) {
            assert!(pair[1].1.monthly_savings > pair[0].1.monthly_savings);
        }
    }

    #[test]
    fn test_vanishing_new_rate_keeps_savings_finite() {
        let params = RefinanceParameters::clamped(300_000.0, 6.5, 30, 1e-15, 5_000.0);
        let result = compute_refinance(&params);

        assert!(result.new_monthly_payment.is_finite());
        assert_relative_eq!(result.new_monthly_payment, 300_000.0 / 360.0, max_relative = 1e-12);
        assert!(result.monthly_savings.is_finite() && result.monthly_savings > 0.0);
        assert!(result.total_savings.is_finite());
    }

    #[test]
    fn test_rate_grid() {
        let grid = rate_grid(3.0, 6.5, 0.25).unwrap();
        assert_eq!(grid.len(), 15);
        assert_eq!(grid[0], 3.0);
        assert_relative_eq!(grid[14], 6.5);

        assert_eq!(rate_grid(5.0, 5.0, 0.1).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_rate_grid_rejects_unbounded_sweeps() {
        assert!(rate_grid(3.0, 6.5, 0.0).is_err());
        assert!(rate_grid(3.0, 6.5, -0.25).is_err());
        assert!(rate_grid(3.0, 6.5, f64::NAN).is_err());
        assert!(rate_grid(6.5, 3.0, 0.25).is_err());

        match rate_grid(3.0, 6.5, 1e-12) {
            Err(LoanError::InvalidInput { field, .. }) => assert_eq!(field, "step"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        // 0..=9_999 is the largest grid allowed
        assert_eq!(rate_grid(0.0, 9_999.0, 1.0).unwrap().len(), MAX_SWEEP_RATES);
        assert!(rate_grid(0.0, 10_000.0, 1.0).is_err());
    }
}
