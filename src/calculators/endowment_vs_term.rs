//! Endowment policy vs term insurance + invest comparison
//!
//! The endowment side accrues a maturity value (sum assured plus simple
//! annual bonus); its mid-term worth is the surrender value, a linear
//! interpolation on the guaranteed-surrender factor over premiums paid.
//! The alternative buys term cover and invests the premium difference.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{CrossRule, FieldSpec, ParsedInputs};
use crate::projection::{
    break_even, decide, ContributionSchedule, Decision, ProjectionConfig, ProjectionEngine,
};

pub struct EndowmentVsTerm;

/// Guaranteed surrender factor: nothing before year 3, then linear from
/// 30% of premiums paid up to 90% in the final year
const SURRENDER_START_YEAR: u32 = 3;
const SURRENDER_FLOOR: f64 = 0.30;
const SURRENDER_CEIL: f64 = 0.90;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("annual_premium", "Endowment annual premium"),
    FieldSpec::amount("sum_assured", "Sum assured"),
    FieldSpec::count("policy_term_years", "Policy term (years)", 40.0),
    FieldSpec::rate("bonus_rate", "Annual bonus rate"),
    FieldSpec::amount("term_premium", "Term plan annual premium"),
    FieldSpec::rate("investment_return", "Investment return"),
];

const CROSS_RULES: &[CrossRule] = &[CrossRule::StrictlyGreater {
    field: "annual_premium",
    than: "term_premium",
    message: "Endowment premium must exceed the term premium for the comparison",
}];

/// Surrender value after `year` of `term` years
fn surrender_value(premiums_paid: f64, year: u32, term: u32, maturity: f64) -> f64 {
    if year >= term {
        return maturity;
    }
    if year < SURRENDER_START_YEAR {
        return 0.0;
    }
    let progress = (year - SURRENDER_START_YEAR) as f64
        / (term - SURRENDER_START_YEAR).max(1) as f64;
    let factor = SURRENDER_FLOOR + (SURRENDER_CEIL - SURRENDER_FLOOR) * progress;
    premiums_paid * factor
}

impl Calculator for EndowmentVsTerm {
    fn slug(&self) -> &'static str {
        "endowment-vs-term"
    }

    fn name(&self) -> &'static str {
        "Endowment vs Term Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn cross_rules(&self) -> &'static [CrossRule] {
        CROSS_RULES
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let annual_premium = inputs.num("annual_premium");
        let sum_assured = inputs.num("sum_assured");
        let term = inputs.num("policy_term_years").round().max(1.0) as u32;
        let bonus_rate = inputs.num("bonus_rate");
        let term_premium = inputs.num("term_premium");
        let investment_return = inputs.num("investment_return");

        // Simple (non-compounding) bonus accrues on the sum assured
        let maturity = sum_assured * (1.0 + bonus_rate / 100.0 * term as f64);

        // The premium difference goes into a yearly SIP
        let difference = annual_premium - term_premium;
        let config = ProjectionConfig::yearly(0.0, investment_return, term)
            .with_contribution(ContributionSchedule::flat(difference));
        let invest_result = ProjectionEngine::new(config).run();
        let invest_series = invest_result.balances();

        let endowment_series: Vec<f64> = (1..=term)
            .map(|year| surrender_value(annual_premium * year as f64, year, term, maturity))
            .collect();

        let invest_corpus = invest_series.last().copied().unwrap_or(0.0);
        let decision = decide(invest_corpus, maturity);
        let break_even_year = break_even(&invest_series, &endowment_series);

        let verdict = match decision {
            Decision::FirstOption => "Term insurance plus investing is better",
            Decision::SecondOption => "The endowment policy is better",
            Decision::NearlyEqual => "Both options are nearly equal",
        };

        let summary = vec![
            SummaryItem::amount("Endowment maturity value", maturity),
            SummaryItem::amount("Term + invest corpus", invest_corpus),
            SummaryItem::amount("Premium invested yearly", difference),
            SummaryItem::text("Verdict", verdict),
        ];

        let chart =
            ChartData::comparison("Term + invest", &invest_series, "Endowment", &endowment_series);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSet;
    use approx::assert_relative_eq;

    fn raw(pairs: &[(&str, &str)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_surrender_value_interpolation() {
        // 20-year term, maturity 10L
        assert_eq!(surrender_value(100_000.0, 2, 20, 1_000_000.0), 0.0);
        assert_relative_eq!(surrender_value(150_000.0, 3, 20, 1_000_000.0), 45_000.0);
        let mid = surrender_value(500_000.0, 10, 20, 1_000_000.0);
        assert!(mid > 150_000.0 && mid < 450_000.0);
        assert_eq!(surrender_value(1_000_000.0, 20, 20, 1_000_000.0), 1_000_000.0);
    }

    #[test]
    fn test_decent_return_beats_endowment() {
        let output = EndowmentVsTerm
            .run(&raw(&[
                ("annual_premium", "100000"),
                ("sum_assured", "2000000"),
                ("policy_term_years", "20"),
                ("bonus_rate", "4"),
                ("term_premium", "15000"),
                ("investment_return", "12"),
            ]))
            .unwrap();
        assert_eq!(output.decision, Some(Decision::FirstOption));
        assert!(output.break_even_period.is_some());
    }

    #[test]
    fn test_premium_must_exceed_term_premium() {
        let errors = EndowmentVsTerm
            .run(&raw(&[
                ("annual_premium", "10000"),
                ("sum_assured", "2000000"),
                ("policy_term_years", "20"),
                ("bonus_rate", "4"),
                ("term_premium", "15000"),
                ("investment_return", "12"),
            ]))
            .unwrap_err();
        assert!(errors.to_string().contains("annual_premium"));
    }
}
