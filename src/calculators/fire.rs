//! FIRE (financial independence / retire early) calculator
//!
//! The corpus starts at 25x annual expenses (the 4% rule), withdrawals
//! grow with inflation, and the projection runs until the corpus
//! depletes or 50 years pass.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{ProjectionConfig, ProjectionEngine, StopRule, WithdrawalSchedule};

pub struct Fire;

/// The 4% rule: corpus = 25x annual expenses
const EXPENSE_MULTIPLE: f64 = 25.0;

/// Horizon cap in years
const MAX_YEARS: u32 = 50;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("annual_expenses", "Annual expenses"),
    FieldSpec::rate("expected_return", "Expected return"),
    FieldSpec::rate("inflation", "Inflation"),
    FieldSpec::rate("lifestyle_adjustment", "Lifestyle adjustment").optional(),
];

impl Calculator for Fire {
    fn slug(&self) -> &'static str {
        "fire"
    }

    fn name(&self) -> &'static str {
        "FIRE Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let annual_expenses = inputs.num("annual_expenses");
        let expected_return = inputs.num("expected_return");
        let inflation = inputs.num("inflation") + inputs.opt("lifestyle_adjustment").unwrap_or(0.0);

        let corpus = annual_expenses * EXPENSE_MULTIPLE;

        let mut config = ProjectionConfig::yearly(corpus, expected_return, MAX_YEARS)
            .with_withdrawal(WithdrawalSchedule {
                amount: annual_expenses,
                annual_inflation_pct: inflation,
            })
            .with_stop(StopRule::UntilDepleted);
        config.max_periods = MAX_YEARS;

        let result = ProjectionEngine::new(config).run();
        let totals = result.totals();

        let sustained = match result.depleted_at {
            Some(year) => SummaryItem::count("Corpus lasts", year as f64, "years"),
            None => SummaryItem::text("Corpus lasts", format!("beyond {MAX_YEARS} years")),
        };

        let summary = vec![
            SummaryItem::amount("FIRE corpus required", corpus),
            sustained,
            SummaryItem::amount("Total withdrawn", totals.total_withdrawals),
            SummaryItem::amount("Corpus remaining", totals.final_balance),
        ];

        let chart = ChartData::balance_line(&result.periods);
        CalcOutput::new(summary, Schedule::Periods(result.periods), chart)
    }
}
