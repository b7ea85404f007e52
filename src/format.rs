//! Presentation formatting for calculator results
//!
//! The engine returns raw doubles; this module renders them in en-US style
//! with a `$` prefix. Monthly figures use 2 decimals, lifetime totals 0.

use std::fmt;

use crate::amortization::AmortizationResult;
use crate::calculator::{RefinanceResult, RepaymentResult};

/// Format a currency amount with thousands separators, e.g. `$1,896.20`
pub fn format_currency(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "$-".to_string();
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-$0.00" is never shown; a value that rounds to zero has no sign
    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, grouped, frac),
        None => format!("{}${}", sign, grouped),
    }
}

/// Format a whole-month count, e.g. `28 months`
pub fn format_months(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

impl fmt::Display for RepaymentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Payment: {}", format_currency(self.monthly_payment, 2))?;
        writeln!(f, "Total Interest:  {}", format_currency(self.total_interest, 0))?;
        write!(f, "Total Payment:   {}", format_currency(self.total_payment, 0))
    }
}

impl fmt::Display for RefinanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_beneficial() { "Recommended" } else { "Not Beneficial" };
        writeln!(f, "Refinancing: {}", verdict)?;
        writeln!(f, "Current Payment: {}", format_currency(self.current_monthly_payment, 2))?;
        writeln!(f, "New Payment:     {}", format_currency(self.new_monthly_payment, 2))?;
        writeln!(f, "Monthly Savings: {}", format_currency(self.monthly_savings, 2))?;
        writeln!(f, "Total Savings:   {}", format_currency(self.total_savings, 0))?;
        write!(f, "Break-even:      {}", format_months(self.break_even_months))
    }
}

impl fmt::Display for AmortizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Payment: {}", format_currency(self.monthly_payment, 2))?;
        writeln!(f, "Total Interest:  {}", format_currency(self.total_interest, 0))?;
        writeln!(f, "Total Payment:   {}", format_currency(self.total_payment(), 0))?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<8} {:>14} {:>14} {:>14} {:>16}",
            "Year", "Payment", "Principal", "Interest", "Balance"
        )?;
        write!(f, "{}", "-".repeat(70))?;

        for entry in &self.schedule {
            write!(
                f,
                "\n{:<8} {:>14} {:>14} {:>14} {:>16}",
                format!("Year {}", entry.year()),
                format_currency(entry.payment, 2),
                format_currency(entry.principal_portion, 2),
                format_currency(entry.interest_portion, 2),
                format_currency(entry.remaining_balance, 2),
            )?;
        }
        Ok(())
    }
}
