//! Generalized period-projection engine
//!
//! One bounded loop drives every calculator: each period the balance is
//! advanced by a composition of withdrawal, contribution, growth and a
//! tax adjustment on the period's interest. Calculators differ only in
//! the configuration they pass in.

use log::debug;

use super::schedule::{PeriodRecord, ProjectionResult};
use super::state::ProjectionState;

/// Recurring contribution, stepped up at each year boundary
#[derive(Debug, Clone)]
pub struct ContributionSchedule {
    /// Amount added each period
    pub amount: f64,

    /// Annual step-up applied at the start of year 2 onward, in percent
    pub annual_step_up_pct: f64,
}

impl ContributionSchedule {
    /// Flat contribution with no step-up
    pub fn flat(amount: f64) -> Self {
        Self { amount, annual_step_up_pct: 0.0 }
    }
}

/// Recurring withdrawal, inflated at each year boundary
#[derive(Debug, Clone)]
pub struct WithdrawalSchedule {
    /// Amount withdrawn each period
    pub amount: f64,

    /// Annual inflation (plus any lifestyle adjustment), in percent
    pub annual_inflation_pct: f64,
}

/// Tax taken out of each period's interest before it is credited
#[derive(Debug, Clone)]
pub struct TaxTreatment {
    /// Slab rate applied to the period's interest, in percent
    pub rate_pct: f64,
}

/// When the projection loop ends (the hard cap always applies on top)
#[derive(Debug, Clone)]
pub enum StopRule {
    /// Run for exactly this many periods
    FixedTenure(u32),

    /// Stop once the closing balance reaches this target
    TargetBalance(f64),

    /// Run until the balance depletes
    UntilDepleted,
}

/// Configuration for a single projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Balance at the start of period 1
    pub opening_balance: f64,

    /// Annual growth rate in percent; converted to a per-period
    /// fraction by dividing by 100 and by periods_per_year
    pub annual_growth_pct: f64,

    /// 1 for yearly projections, 12 for monthly
    pub periods_per_year: u32,

    /// Recurring contribution, if any
    pub contribution: Option<ContributionSchedule>,

    /// Recurring withdrawal, if any
    pub withdrawal: Option<WithdrawalSchedule>,

    /// Tax adjustment on interest, if any
    pub tax: Option<TaxTreatment>,

    /// Stop rule for this run
    pub stop: StopRule,

    /// Hard iteration ceiling; guarantees termination even under
    /// pathological inputs
    pub max_periods: u32,
}

impl ProjectionConfig {
    /// Yearly projection skeleton: growth only, fixed tenure
    pub fn yearly(opening_balance: f64, annual_growth_pct: f64, years: u32) -> Self {
        Self {
            opening_balance,
            annual_growth_pct,
            periods_per_year: 1,
            contribution: None,
            withdrawal: None,
            tax: None,
            stop: StopRule::FixedTenure(years),
            max_periods: 100,
        }
    }

    /// Monthly projection skeleton: growth only, fixed tenure in months
    pub fn monthly(opening_balance: f64, annual_growth_pct: f64, months: u32) -> Self {
        Self {
            opening_balance,
            annual_growth_pct,
            periods_per_year: 12,
            contribution: None,
            withdrawal: None,
            tax: None,
            stop: StopRule::FixedTenure(months),
            max_periods: 600,
        }
    }

    pub fn with_contribution(mut self, schedule: ContributionSchedule) -> Self {
        self.contribution = Some(schedule);
        self
    }

    pub fn with_withdrawal(mut self, schedule: WithdrawalSchedule) -> Self {
        self.withdrawal = Some(schedule);
        self
    }

    pub fn with_tax(mut self, tax: TaxTreatment) -> Self {
        self.tax = Some(tax);
        self
    }

    pub fn with_stop(mut self, stop: StopRule) -> Self {
        self.stop = stop;
        self
    }
}

/// The projection engine: one config in, one schedule out
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection.
    ///
    /// Period order: withdrawal at the start of the period, then
    /// contribution, then growth on the post-flow balance, with tax
    /// deducted from the period's interest before crediting. The loop
    /// never exceeds `max_periods`.
    pub fn run(&self) -> ProjectionResult {
        let config = &self.config;
        let ppy = config.periods_per_year.max(1);
        let rate = config.annual_growth_pct / 100.0 / ppy as f64;
        let tax_rate = config.tax.as_ref().map(|t| t.rate_pct / 100.0).unwrap_or(0.0);

        let cap = match config.stop {
            StopRule::FixedTenure(periods) => periods.min(config.max_periods),
            _ => config.max_periods,
        };

        let mut state = ProjectionState::from_config(config);
        let mut result = ProjectionResult::new();

        for _ in 0..cap {
            state.advance_period(config);

            let opening = state.balance;
            let contribution = if config.contribution.is_some() { state.contribution } else { 0.0 };
            let requested_wd = if config.withdrawal.is_some() { state.withdrawal } else { 0.0 };

            // Depletion: the requested withdrawal exceeds what is
            // available; take what remains, clamp the balance to zero
            // and stop. The recorded period count is "years sustained".
            let available = opening + contribution;
            if requested_wd > 0.0 && requested_wd >= available {
                result.add_row(PeriodRecord {
                    period: state.period,
                    year: state.year,
                    opening_balance: opening,
                    contribution,
                    withdrawal: available,
                    interest: 0.0,
                    tax: 0.0,
                    closing_balance: 0.0,
                });
                result.depleted_at = Some(state.period);
                break;
            }

            let base = available - requested_wd;
            let gross_interest = base * rate;
            let tax = if gross_interest > 0.0 { gross_interest * tax_rate } else { 0.0 };
            let interest = gross_interest - tax;
            let closing = (base + interest).max(0.0);

            result.add_row(PeriodRecord {
                period: state.period,
                year: state.year,
                opening_balance: opening,
                contribution,
                withdrawal: requested_wd,
                interest,
                tax,
                closing_balance: closing,
            });

            state.balance = closing;

            if closing <= 0.0 && matches!(config.stop, StopRule::UntilDepleted) {
                result.depleted_at = Some(state.period);
                break;
            }

            if let StopRule::TargetBalance(target) = config.stop {
                if closing >= target {
                    result.target_reached_at = Some(state.period);
                    break;
                }
            }
        }

        debug!(
            "projection finished: {} periods, final balance {:.2}",
            result.periods.len(),
            result.periods.last().map(|r| r.closing_balance).unwrap_or(0.0)
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_lump_sum_compound_growth() {
        let engine = ProjectionEngine::new(ProjectionConfig::yearly(100_000.0, 8.0, 3));
        let result = engine.run();

        assert_eq!(result.periods.len(), 3);
        assert_relative_eq!(
            result.totals().final_balance,
            100_000.0 * 1.08_f64.powi(3),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_monthly_sip_matches_annuity_due_formula() {
        let config = ProjectionConfig::monthly(0.0, 12.0, 120)
            .with_contribution(ContributionSchedule::flat(10_000.0));
        let result = ProjectionEngine::new(config).run();

        // Contribution at the start of each period: annuity-due future value
        let i: f64 = 0.01;
        let n = 120;
        let expected = 10_000.0 * ((1.0 + i).powi(n) - 1.0) / i * (1.0 + i);
        assert_relative_eq!(result.totals().final_balance, expected, epsilon = 1e-4);
        assert_relative_eq!(result.totals().total_contributions, 1_200_000.0);
    }

    #[test]
    fn test_withdrawal_depletes_and_clamps_to_zero() {
        let config = ProjectionConfig::yearly(100_000.0, 0.0, 10)
            .with_withdrawal(WithdrawalSchedule { amount: 40_000.0, annual_inflation_pct: 0.0 })
            .with_stop(StopRule::UntilDepleted);
        let result = ProjectionEngine::new(config).run();

        // 40k, 40k, then only 20k remains
        assert_eq!(result.depleted_at, Some(3));
        let last = result.periods.last().unwrap();
        assert_eq!(last.closing_balance, 0.0);
        assert_relative_eq!(last.withdrawal, 20_000.0);
    }

    #[test]
    fn test_withdrawal_inflates_yearly() {
        let config = ProjectionConfig::yearly(10_000_000.0, 8.0, 3)
            .with_withdrawal(WithdrawalSchedule { amount: 500_000.0, annual_inflation_pct: 6.0 });
        let result = ProjectionEngine::new(config).run();

        assert_relative_eq!(result.periods[0].withdrawal, 500_000.0);
        assert_relative_eq!(result.periods[1].withdrawal, 530_000.0);
        assert_relative_eq!(result.periods[2].withdrawal, 561_800.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tax_reduces_interest_only() {
        let config = ProjectionConfig::yearly(100_000.0, 10.0, 1)
            .with_tax(TaxTreatment { rate_pct: 30.0 });
        let result = ProjectionEngine::new(config).run();

        let row = &result.periods[0];
        assert_abs_diff_eq!(row.tax, 3_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(row.interest, 7_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(row.closing_balance, 107_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_target_balance_stops_early() {
        let config = ProjectionConfig::monthly(0.0, 12.0, 600)
            .with_contribution(ContributionSchedule::flat(50_000.0))
            .with_stop(StopRule::TargetBalance(10_000_000.0));
        let result = ProjectionEngine::new(config).run();

        let reached = result.target_reached_at.expect("target should be reached");
        assert!(reached < 600);
        assert!(result.totals().final_balance >= 10_000_000.0);
        // First period to reach the target, so the prior one was short
        let prior = &result.periods[reached as usize - 2];
        assert!(prior.closing_balance < 10_000_000.0);
    }

    #[test]
    fn test_hard_cap_under_pathological_inputs() {
        // Withdrawals never deplete a growing corpus; the cap must end the loop
        let mut config = ProjectionConfig::yearly(10_000_000.0, 12.0, 50)
            .with_withdrawal(WithdrawalSchedule { amount: 100_000.0, annual_inflation_pct: 0.0 })
            .with_stop(StopRule::UntilDepleted);
        config.max_periods = 50;
        let result = ProjectionEngine::new(config).run();

        assert_eq!(result.periods.len(), 50);
        assert_eq!(result.depleted_at, None);
    }

    #[test]
    fn test_zero_growth_zero_flows_is_flat() {
        let result = ProjectionEngine::new(ProjectionConfig::yearly(5_000.0, 0.0, 5)).run();
        for row in &result.periods {
            assert_relative_eq!(row.closing_balance, 5_000.0);
            assert_relative_eq!(row.interest, 0.0);
        }
    }
}
