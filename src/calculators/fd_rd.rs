//! Fixed deposit / recurring deposit calculator
//!
//! FD compounds a lump sum quarterly (folded into an effective annual
//! rate so the table stays year-wise); RD adds a monthly deposit. An
//! optional tax slab is applied to each period's interest before it is
//! credited, the way banks deduct TDS on accrual.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{
    aggregate_yearly, ContributionSchedule, ProjectionConfig, ProjectionEngine, TaxTreatment,
};

pub struct FdRd;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("mode", "Deposit type", &["fd", "rd"]),
    FieldSpec::amount("deposit", "Deposit amount"),
    FieldSpec::rate("annual_rate", "Annual interest rate"),
    FieldSpec::count("tenure_years", "Tenure (years)", 25.0),
    FieldSpec::free_rate("tax_slab", "Tax slab on interest (%)").optional(),
];

/// Quarterly compounding folded into one annual rate
fn effective_annual_rate(annual_rate_pct: f64) -> f64 {
    ((1.0 + annual_rate_pct / 400.0).powi(4) - 1.0) * 100.0
}

impl Calculator for FdRd {
    fn slug(&self) -> &'static str {
        "fd-rd"
    }

    fn name(&self) -> &'static str {
        "FD / RD Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let deposit = inputs.num("deposit");
        let annual_rate = inputs.num("annual_rate");
        let years = inputs.num("tenure_years").round() as u32;
        let tax_slab = inputs.opt("tax_slab");

        let mut config = match inputs.choice("mode") {
            "rd" => ProjectionConfig::monthly(0.0, annual_rate, years * 12)
                .with_contribution(ContributionSchedule::flat(deposit)),
            // FD: lump sum at effective annual rate, year-wise periods
            _ => ProjectionConfig::yearly(deposit, effective_annual_rate(annual_rate), years),
        };
        if let Some(rate_pct) = tax_slab {
            config = config.with_tax(TaxTreatment { rate_pct });
        }

        let result = ProjectionEngine::new(config).run();
        let totals = result.totals();
        let yearly = aggregate_yearly(&result.periods);

        let invested = if inputs.choice("mode") == "rd" {
            totals.total_contributions
        } else {
            deposit
        };

        let mut summary = vec![
            SummaryItem::amount("Total invested", invested),
            SummaryItem::amount("Interest earned", totals.total_interest),
            SummaryItem::amount("Maturity value", totals.final_balance),
        ];
        if tax_slab.is_some() {
            summary.push(SummaryItem::amount("Tax deducted", totals.total_tax));
        }

        let chart = ChartData::invested_vs_value(&yearly);
        CalcOutput::new(summary, Schedule::Periods(yearly), chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::SummaryValue;
    use crate::input::InputSet;
    use approx::assert_relative_eq;

    fn raw(pairs: &[(&str, &str)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn amount_of(output: &CalcOutput, idx: usize) -> f64 {
        match output.summary[idx].value {
            SummaryValue::Amount(v) => v,
            _ => panic!("expected amount"),
        }
    }

    #[test]
    fn test_fd_matches_quarterly_compounding() {
        let output = FdRd
            .run(&raw(&[
                ("mode", "fd"),
                ("deposit", "100000"),
                ("annual_rate", "7.0"),
                ("tenure_years", "5"),
            ]))
            .unwrap();

        let expected = 100_000.0 * (1.0_f64 + 0.07 / 4.0).powi(20);
        assert_relative_eq!(amount_of(&output, 2), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_fd_year_wise_table_length() {
        let output = FdRd
            .run(&raw(&[
                ("mode", "fd"),
                ("deposit", "100000"),
                ("annual_rate", "7.0"),
                ("tenure_years", "5"),
            ]))
            .unwrap();
        match &output.schedule {
            Schedule::Periods(rows) => assert_eq!(rows.len(), 5),
            _ => panic!("expected period schedule"),
        }
    }

    #[test]
    fn test_rd_total_deposits() {
        let output = FdRd
            .run(&raw(&[
                ("mode", "rd"),
                ("deposit", "5000"),
                ("annual_rate", "6.5"),
                ("tenure_years", "2"),
            ]))
            .unwrap();

        assert_relative_eq!(amount_of(&output, 0), 120_000.0);
        assert!(amount_of(&output, 2) > 120_000.0);
    }

    #[test]
    fn test_tax_slab_reduces_maturity() {
        let untaxed = FdRd
            .run(&raw(&[
                ("mode", "fd"),
                ("deposit", "100000"),
                ("annual_rate", "7.0"),
                ("tenure_years", "5"),
            ]))
            .unwrap();
        let taxed = FdRd
            .run(&raw(&[
                ("mode", "fd"),
                ("deposit", "100000"),
                ("annual_rate", "7.0"),
                ("tenure_years", "5"),
                ("tax_slab", "30"),
            ]))
            .unwrap();

        assert!(amount_of(&taxed, 2) < amount_of(&untaxed, 2));
        assert_eq!(taxed.summary.len(), 4);
    }
}
