//! Sukanya Samriddhi Yojana calculator
//!
//! Yearly deposits for up to 15 years; the account matures when the
//! girl child turns 21, with the corpus compounding untouched after the
//! deposit phase ends.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{ContributionSchedule, PeriodRecord, ProjectionConfig, ProjectionEngine};

pub struct SukanyaSamriddhi;

/// Scheme rate as notified (used when the rate field is left blank)
const DEFAULT_RATE_PCT: f64 = 8.2;

/// Account matures when the child turns 21
const MATURITY_AGE: u32 = 21;

/// Deposits are allowed for at most 15 years
const MAX_DEPOSIT_YEARS: f64 = 15.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("yearly_deposit", "Yearly deposit"),
    // Strictly under 21 at account opening
    FieldSpec::count("child_age", "Child's age", 20.0),
    FieldSpec::count("deposit_years", "Deposit duration (years)", MAX_DEPOSIT_YEARS),
    FieldSpec::rate("rate", "Interest rate").optional(),
];

impl Calculator for SukanyaSamriddhi {
    fn slug(&self) -> &'static str {
        "ssy"
    }

    fn name(&self) -> &'static str {
        "Sukanya Samriddhi Yojana Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let deposit = inputs.num("yearly_deposit");
        let child_age = inputs.num("child_age").round() as u32;
        let rate = inputs.opt("rate").unwrap_or(DEFAULT_RATE_PCT);

        let total_years = MATURITY_AGE - child_age.min(MATURITY_AGE - 1);
        let deposit_years = (inputs.num("deposit_years").round() as u32).min(total_years);
        let growth_years = total_years - deposit_years;

        // Deposit phase
        let config = ProjectionConfig::yearly(0.0, rate, deposit_years)
            .with_contribution(ContributionSchedule::flat(deposit));
        let deposit_phase = ProjectionEngine::new(config).run();

        // Growth-only phase until maturity
        let corpus_after_deposits = deposit_phase.totals().final_balance;
        let growth_phase =
            ProjectionEngine::new(ProjectionConfig::yearly(corpus_after_deposits, rate, growth_years))
                .run();

        let mut periods: Vec<PeriodRecord> = deposit_phase.periods;
        for row in growth_phase.periods {
            periods.push(PeriodRecord {
                period: row.period + deposit_years,
                year: row.year + deposit_years,
                ..row
            });
        }

        let maturity_value = periods.last().map(|r| r.closing_balance).unwrap_or(0.0);
        let invested = deposit * deposit_years as f64;

        let summary = vec![
            SummaryItem::amount("Total invested", invested),
            SummaryItem::amount("Interest earned", maturity_value - invested),
            SummaryItem::amount("Maturity value", maturity_value),
            SummaryItem::count("Matures in", total_years as f64, "years"),
        ];

        let chart = ChartData::invested_vs_value(&periods);
        CalcOutput::new(summary, Schedule::Periods(periods), chart)
    }
}
