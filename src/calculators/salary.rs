//! Salary break-down calculator
//!
//! Splits an annual CTC into its usual components (basic, HRA, employer
//! EPF, special allowance), applies the simplified new-regime income
//! tax slabs, and reports the monthly in-hand amount. Summary-only: no
//! projection runs here.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::{ChartData, ChartKind, ChartSeries};
use crate::input::{FieldSpec, ParsedInputs};

pub struct Salary;

/// Standard deduction under the new regime
const STANDARD_DEDUCTION: f64 = 50_000.0;

/// 87A rebate: no tax when taxable income is within this
const REBATE_LIMIT: f64 = 700_000.0;

/// Health and education cess on the computed tax
const CESS_PCT: f64 = 4.0;

/// Professional tax per month (state-typical flat amount)
const PROFESSIONAL_TAX_MONTHLY: f64 = 200.0;

/// EPF contribution as a share of basic, each side
const EPF_PCT: f64 = 12.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("annual_ctc", "Annual CTC"),
    FieldSpec::rate("basic_pct", "Basic as % of CTC").optional(),
];

/// New-regime slab tax on taxable income, before cess and rebate
fn slab_tax(taxable: f64) -> f64 {
    // (upper bound, rate) pairs; the last band is open-ended
    const SLABS: [(f64, f64); 5] = [
        (300_000.0, 0.0),
        (600_000.0, 0.05),
        (900_000.0, 0.10),
        (1_200_000.0, 0.15),
        (1_500_000.0, 0.20),
    ];
    const TOP_RATE: f64 = 0.30;

    let mut tax = 0.0;
    let mut lower = 0.0;
    for (upper, rate) in SLABS {
        if taxable <= lower {
            break;
        }
        tax += (taxable.min(upper) - lower) * rate;
        lower = upper;
    }
    if taxable > lower {
        tax += (taxable - lower) * TOP_RATE;
    }
    tax
}

/// Income tax including the 87A rebate and cess
fn income_tax(taxable: f64) -> f64 {
    if taxable <= REBATE_LIMIT {
        return 0.0;
    }
    slab_tax(taxable) * (1.0 + CESS_PCT / 100.0)
}

impl Calculator for Salary {
    fn slug(&self) -> &'static str {
        "salary"
    }

    fn name(&self) -> &'static str {
        "Salary Break-down Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let ctc = inputs.num("annual_ctc");
        let basic_pct = inputs.opt("basic_pct").unwrap_or(40.0).min(100.0);

        let basic = ctc * basic_pct / 100.0;
        let hra = basic * 0.50;
        let employer_epf = basic * EPF_PCT / 100.0;
        let special_allowance = (ctc - basic - hra - employer_epf).max(0.0);

        let gross = ctc - employer_epf;
        let employee_epf = basic * EPF_PCT / 100.0;
        let taxable = (gross - STANDARD_DEDUCTION).max(0.0);
        let tax = income_tax(taxable);
        let professional_tax = PROFESSIONAL_TAX_MONTHLY * 12.0;

        let annual_in_hand = gross - employee_epf - tax - professional_tax;
        let monthly_in_hand = annual_in_hand / 12.0;

        let summary = vec![
            SummaryItem::amount("Basic salary", basic),
            SummaryItem::amount("HRA", hra),
            SummaryItem::amount("Special allowance", special_allowance),
            SummaryItem::amount("Employer EPF", employer_epf),
            SummaryItem::amount("Employee EPF", employee_epf),
            SummaryItem::amount("Income tax", tax),
            SummaryItem::amount("Professional tax", professional_tax),
            SummaryItem::amount("Monthly in-hand", monthly_in_hand),
        ];

        // Pie of where the CTC goes
        let chart = ChartData::new(ChartKind::Pie).push(ChartSeries::new(
            "CTC split",
            vec![annual_in_hand, employee_epf + employer_epf, tax + professional_tax],
        ));

        CalcOutput::new(summary, Schedule::None, chart)
    }
}
