//! Fixed-rate annuity payment primitive
//!
//! Every calculator derives its monthly payment from here. Rates come in as
//! annual percentages (6.5 = 6.5%) and are converted to a monthly decimal rate.

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of monthly payments in a term of whole years
pub fn number_of_payments(term_years: u32) -> u32 {
    term_years.saturating_mul(12)
}

/// Level monthly payment that fully amortizes `principal` over `term_years`
///
/// # Arguments
/// * `principal` - Loan amount (>= 0)
/// * `annual_rate_percent` - Annual rate as a percentage (>= 0)
/// * `term_years` - Term in years; callers clamp this to at least 1
///
/// # Returns
/// * Monthly payment, unrounded. A zero rate falls back to straight-line
///   repayment (`principal / n`).
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    payment_for_rate(
        principal,
        monthly_rate(annual_rate_percent),
        number_of_payments(term_years),
    )
}

/// `(1+r)^n - 1`, computed without cancellation for small rates
fn growth_less_one(periodic_rate: f64, periods: f64) -> f64 {
    (periods * periodic_rate.ln_1p()).exp_m1()
}

/// Annuity payment for a periodic rate and payment count
///
/// Rates too small to move `(1+r)^n` by more than one ulp repay straight-line.
pub fn payment_for_rate(principal: f64, periodic_rate: f64, n_payments: u32) -> f64 {
    let n = f64::from(n_payments);
    let growth_less_one = growth_less_one(periodic_rate, n);

    if periodic_rate == 0.0 || growth_less_one < f64::EPSILON {
        return principal / n;
    }

    // r(1+r)^n / ((1+r)^n - 1) == r(1 + 1/((1+r)^n - 1)), which stays finite
    // when the growth factor overflows
    principal * periodic_rate * (1.0 + growth_less_one.recip())
}

/// Closed-form outstanding balance after `payments_made` level payments
///
/// Balance = P(1+r)^k - PMT((1+r)^k - 1)/r, clamped at zero so terminal
/// rounding residue never reports a negative balance.
pub fn balance_after(principal: f64, periodic_rate: f64, payment: f64, payments_made: u32) -> f64 {
    let k = f64::from(payments_made);
    let growth_less_one = growth_less_one(periodic_rate, k);

    let balance = if periodic_rate == 0.0 || growth_less_one < f64::EPSILON {
        principal - payment * k
    } else {
        principal * (1.0 + growth_less_one) - payment * growth_less_one / periodic_rate
    };

    balance.max(0.0)
}
