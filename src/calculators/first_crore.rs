//! Time-to-first-crore calculator
//!
//! Monthly SIP with an optional yearly step-up, projected until the
//! corpus first reaches one crore or 50 years pass.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{
    aggregate_yearly, ContributionSchedule, ProjectionConfig, ProjectionEngine, StopRule,
};

pub struct FirstCrore;

/// The target: one crore
const TARGET: f64 = 10_000_000.0;

/// Hard cap: 50 years of months
const MAX_MONTHS: u32 = 600;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("monthly_sip", "Monthly SIP"),
    FieldSpec::rate("expected_return", "Expected return"),
    FieldSpec::rate("annual_step_up", "Yearly SIP step-up").optional(),
];

impl Calculator for FirstCrore {
    fn slug(&self) -> &'static str {
        "first-crore"
    }

    fn name(&self) -> &'static str {
        "First Crore Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let monthly_sip = inputs.num("monthly_sip");
        let expected_return = inputs.num("expected_return");
        let step_up = inputs.opt("annual_step_up").unwrap_or(0.0);

        let config = ProjectionConfig::monthly(0.0, expected_return, MAX_MONTHS)
            .with_contribution(ContributionSchedule {
                amount: monthly_sip,
                annual_step_up_pct: step_up,
            })
            .with_stop(StopRule::TargetBalance(TARGET));

        let result = ProjectionEngine::new(config).run();
        let totals = result.totals();

        let reached = match result.target_reached_at {
            Some(months) => {
                let years = months / 12;
                let rem = months % 12;
                SummaryItem::text(
                    "First crore in",
                    format!("{years} years {rem} months"),
                )
            }
            None => SummaryItem::text("First crore in", "not reached within 50 years"),
        };

        let summary = vec![
            reached,
            SummaryItem::amount("Total invested", totals.total_contributions),
            SummaryItem::amount("Growth earned", totals.total_interest),
            SummaryItem::amount("Corpus", totals.final_balance),
        ];

        let yearly = aggregate_yearly(&result.periods);
        let chart = ChartData::invested_vs_value(&yearly);
        CalcOutput::new(summary, Schedule::Periods(yearly), chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::SummaryValue;
    use crate::input::InputSet;

    fn raw(pairs: &[(&str, &str)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn corpus_of(output: &CalcOutput) -> f64 {
        match output.summary[3].value {
            SummaryValue::Amount(v) => v,
            _ => panic!("expected amount"),
        }
    }

    #[test]
    fn test_reaches_target() {
        let output = FirstCrore
            .run(&raw(&[
                ("monthly_sip", "25000"),
                ("expected_return", "12"),
            ]))
            .unwrap();

        assert!(corpus_of(&output) >= TARGET);
        match &output.summary[0].value {
            SummaryValue::Text(text) => assert!(text.contains("years")),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn test_step_up_reaches_target_sooner() {
        let flat = FirstCrore
            .run(&raw(&[
                ("monthly_sip", "15000"),
                ("expected_return", "12"),
            ]))
            .unwrap();
        let stepped = FirstCrore
            .run(&raw(&[
                ("monthly_sip", "15000"),
                ("expected_return", "12"),
                ("annual_step_up", "10"),
            ]))
            .unwrap();

        // Fewer year rows means the target came sooner
        let rows = |output: &CalcOutput| match &output.schedule {
            Schedule::Periods(rows) => rows.len(),
            _ => panic!("expected period schedule"),
        };
        assert!(rows(&stepped) < rows(&flat));
    }

    #[test]
    fn test_tiny_sip_never_reaches() {
        let output = FirstCrore
            .run(&raw(&[("monthly_sip", "100"), ("expected_return", "4")]))
            .unwrap();

        match &output.summary[0].value {
            SummaryValue::Text(text) => assert!(text.contains("not reached")),
            _ => panic!("expected text"),
        }
        assert!(corpus_of(&output) < TARGET);
        match &output.schedule {
            Schedule::Periods(rows) => assert_eq!(rows.len(), 50),
            _ => panic!("expected period schedule"),
        }
    }
}
