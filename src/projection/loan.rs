//! EMI and amortization schedule calculations
//!
//! The EMI follows the standard annuity formula
//! `P * r * (1+r)^n / ((1+r)^n - 1)` with a straight-line fallback when
//! the rate is zero (the denominator vanishes at r = 0).

use serde::{Deserialize, Serialize};

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPeriod {
    /// Month number, 1-indexed
    pub month: u32,

    /// Outstanding principal at the start of the month
    pub opening_balance: f64,

    /// Payment made this month
    pub payment: f64,

    /// Interest component of the payment
    pub interest: f64,

    /// Principal component of the payment
    pub principal: f64,

    /// Outstanding principal after the payment (0 on the final row)
    pub closing_balance: f64,
}

/// Monthly EMI for a loan.
///
/// A zero rate falls back to `principal / months` rather than dividing
/// by a zero denominator.
pub fn emi(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return principal / months as f64;
    }
    let factor = (1.0 + r).powi(months as i32);
    principal * r * factor / (factor - 1.0)
}

/// Full month-by-month amortization schedule.
///
/// The final row retires whatever principal remains so the closing
/// balance lands on exactly zero instead of a rounding residue.
pub fn amortization_schedule(principal: f64, annual_rate_pct: f64, months: u32) -> Vec<LoanPeriod> {
    let payment = emi(principal, annual_rate_pct, months);
    let r = annual_rate_pct / 100.0 / 12.0;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance * r;
        let mut principal_component = payment - interest;
        let mut paid = payment;

        if month == months || principal_component >= balance {
            principal_component = balance;
            paid = principal_component + interest;
        }

        let closing = balance - principal_component;
        schedule.push(LoanPeriod {
            month,
            opening_balance: balance,
            payment: paid,
            interest,
            principal: principal_component,
            closing_balance: closing,
        });
        balance = closing;

        if balance <= 0.0 {
            break;
        }
    }

    schedule
}

/// Total interest paid over a schedule
pub fn total_interest(schedule: &[LoanPeriod]) -> f64 {
    schedule.iter().map(|row| row.interest).sum()
}
