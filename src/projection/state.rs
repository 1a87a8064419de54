//! Running state for a single projection

use super::engine::ProjectionConfig;

/// Mutable state carried from one period to the next
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current period (1-indexed once the loop starts)
    pub period: u32,

    /// Year the current period falls in (1-indexed)
    pub year: u32,

    /// Period within the current year (1..=periods_per_year)
    pub period_in_year: u32,

    /// Balance at the start of the current period
    pub balance: f64,

    /// Per-period contribution, after step-ups applied so far
    pub contribution: f64,

    /// Per-period withdrawal, after inflation applied so far
    pub withdrawal: f64,
}

impl ProjectionState {
    /// Initialize state from a projection config
    pub fn from_config(config: &ProjectionConfig) -> Self {
        Self {
            period: 0,
            year: 1,
            period_in_year: 0,
            balance: config.opening_balance,
            contribution: config.contribution.as_ref().map(|c| c.amount).unwrap_or(0.0),
            withdrawal: config.withdrawal.as_ref().map(|w| w.amount).unwrap_or(0.0),
        }
    }

    /// Advance to the next period, applying step-up and inflation at
    /// each year boundary.
    pub fn advance_period(&mut self, config: &ProjectionConfig) {
        self.period += 1;
        let ppy = config.periods_per_year.max(1);
        self.year = (self.period - 1) / ppy + 1;
        self.period_in_year = (self.period - 1) % ppy + 1;

        // Year boundary: contributions step up, withdrawals inflate
        if self.period_in_year == 1 && self.year > 1 {
            if let Some(contribution) = &config.contribution {
                self.contribution *= 1.0 + contribution.annual_step_up_pct / 100.0;
            }
            if let Some(withdrawal) = &config.withdrawal {
                self.withdrawal *= 1.0 + withdrawal.annual_inflation_pct / 100.0;
            }
        }
    }
}
