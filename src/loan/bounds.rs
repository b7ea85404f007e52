//! Form input bounds and text parsing for calculator fields
//!
//! The engine only needs non-negative amounts and a term of 1 to 50 years.
//! The form controls additionally cap the rate and principal; those caps
//! live here so callers can apply them explicitly.

use serde::{Deserialize, Serialize};

use super::data::MAX_TERM_YEARS;

/// Slider and field bounds used by the calculator forms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub principal_min: f64,
    pub principal_max: f64,
    pub principal_step: f64,
    pub rate_max_percent: f64,
    pub rate_step_percent: f64,
    pub term_min_years: u32,
    pub term_max_years: u32,
    pub refinancing_cost_step: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            principal_min: 10_000.0,
            principal_max: 1_000_000.0,
            principal_step: 10_000.0,
            rate_max_percent: 20.0,
            rate_step_percent: 0.1,
            term_min_years: 1,
            term_max_years: MAX_TERM_YEARS,
            refinancing_cost_step: 500.0,
        }
    }
}

impl InputBounds {
    /// Restrict a rate to the form's [0, max] range
    pub fn limit_rate(&self, rate_percent: f64) -> f64 {
        if rate_percent.is_nan() {
            return 0.0;
        }
        rate_percent.clamp(0.0, self.rate_max_percent)
    }

    /// Restrict a term to the form's [min, max] range
    pub fn limit_term(&self, years: i64) -> u32 {
        let min = i64::from(self.term_min_years);
        let max = i64::from(self.term_max_years);
        // bounded by term_max_years, so the cast cannot truncate
        years.clamp(min, max) as u32
    }

    /// Snap a principal to the slider's range and step
    pub fn snap_principal(&self, principal: f64) -> f64 {
        if principal.is_nan() {
            return self.principal_min;
        }
        let limited = principal.clamp(self.principal_min, self.principal_max);
        let steps = ((limited - self.principal_min) / self.principal_step).round();
        (self.principal_min + steps * self.principal_step).min(self.principal_max)
    }
}

/// Parse a numeric form field; anything that is not a finite number reads as 0
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' '))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a term field in years; fractional input is truncated toward zero
pub fn parse_term(text: &str) -> i64 {
    parse_amount(text).trunc() as i64
}
