//! Period schedule output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one period (year or month).
///
/// The ordered sequence of these rows is the "year-wise" table shown
/// under a calculator, or the amortization schedule for loans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period number, 1-indexed
    pub period: u32,

    /// Year the period falls in, 1-indexed
    pub year: u32,

    /// Balance at the start of the period
    pub opening_balance: f64,

    /// Contribution added during the period
    pub contribution: f64,

    /// Withdrawal taken during the period
    pub withdrawal: f64,

    /// Interest or growth credited, net of tax
    pub interest: f64,

    /// Tax deducted from the period's interest
    pub tax: f64,

    /// Balance at the end of the period (never negative)
    pub closing_balance: f64,
}

/// Complete result of one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Per-period rows, in order
    pub periods: Vec<PeriodRecord>,

    /// Period at which the balance depleted, if it did
    pub depleted_at: Option<u32>,

    /// Period at which the target balance was first reached, if ever
    pub target_reached_at: Option<u32>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            periods: Vec::new(),
            depleted_at: None,
            target_reached_at: None,
        }
    }

    pub fn add_row(&mut self, row: PeriodRecord) {
        self.periods.push(row);
    }

    /// Aggregate totals over the full schedule
    pub fn totals(&self) -> ProjectionTotals {
        let total_contributions: f64 = self.periods.iter().map(|r| r.contribution).sum();
        let total_withdrawals: f64 = self.periods.iter().map(|r| r.withdrawal).sum();
        let total_interest: f64 = self.periods.iter().map(|r| r.interest).sum();
        let total_tax: f64 = self.periods.iter().map(|r| r.tax).sum();
        let final_balance = self.periods.last().map(|r| r.closing_balance).unwrap_or(0.0);

        ProjectionTotals {
            periods_run: self.periods.len() as u32,
            total_contributions,
            total_withdrawals,
            total_interest,
            total_tax,
            final_balance,
        }
    }

    /// Closing balance of each period, for charts and comparisons
    pub fn balances(&self) -> Vec<f64> {
        self.periods.iter().map(|r| r.closing_balance).collect()
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary totals for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionTotals {
    pub periods_run: u32,
    pub total_contributions: f64,
    pub total_withdrawals: f64,
    pub total_interest: f64,
    pub total_tax: f64,
    pub final_balance: f64,
}

/// Collapse a monthly (or quarterly) schedule into year-wise rows:
/// flows sum within the year, balances take the year's endpoints.
pub fn aggregate_yearly(periods: &[PeriodRecord]) -> Vec<PeriodRecord> {
    let mut years: Vec<PeriodRecord> = Vec::new();

    for row in periods {
        match years.last_mut() {
            Some(agg) if agg.year == row.year => {
                agg.contribution += row.contribution;
                agg.withdrawal += row.withdrawal;
                agg.interest += row.interest;
                agg.tax += row.tax;
                agg.closing_balance = row.closing_balance;
            }
            _ => {
                years.push(PeriodRecord {
                    period: years.len() as u32 + 1,
                    year: row.year,
                    opening_balance: row.opening_balance,
                    contribution: row.contribution,
                    withdrawal: row.withdrawal,
                    interest: row.interest,
                    tax: row.tax,
                    closing_balance: row.closing_balance,
                });
            }
        }
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(period: u32, contribution: f64, interest: f64, closing: f64) -> PeriodRecord {
        PeriodRecord {
            period,
            year: period,
            opening_balance: 0.0,
            contribution,
            withdrawal: 0.0,
            interest,
            tax: 0.0,
            closing_balance: closing,
        }
    }

    #[test]
    fn test_totals_aggregate() {
        let mut result = ProjectionResult::new();
        result.add_row(row(1, 1000.0, 80.0, 1080.0));
        result.add_row(row(2, 1000.0, 166.4, 2246.4));

        let totals = result.totals();
        assert_eq!(totals.periods_run, 2);
        assert_relative_eq!(totals.total_contributions, 2000.0);
        assert_relative_eq!(totals.total_interest, 246.4);
        assert_relative_eq!(totals.final_balance, 2246.4);
    }

    #[test]
    fn test_empty_result_totals() {
        let totals = ProjectionResult::new().totals();
        assert_eq!(totals.periods_run, 0);
        assert_eq!(totals.final_balance, 0.0);
    }

    #[test]
    fn test_aggregate_yearly() {
        let mut periods = Vec::new();
        for month in 1..=24u32 {
            periods.push(PeriodRecord {
                period: month,
                year: (month - 1) / 12 + 1,
                opening_balance: (month - 1) as f64 * 100.0,
                contribution: 100.0,
                withdrawal: 0.0,
                interest: 1.0,
                tax: 0.0,
                closing_balance: month as f64 * 100.0,
            });
        }

        let years = aggregate_yearly(&periods);
        assert_eq!(years.len(), 2);
        assert_relative_eq!(years[0].contribution, 1_200.0);
        assert_relative_eq!(years[0].interest, 12.0);
        assert_relative_eq!(years[0].closing_balance, 1_200.0);
        assert_relative_eq!(years[1].opening_balance, 1_200.0);
        assert_eq!(years[1].period, 2);
    }
}
