//! Loan EMI calculator with full amortization schedule

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{amortization_schedule, emi, total_interest};

pub struct Emi;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("principal", "Loan amount"),
    FieldSpec::rate("annual_rate", "Annual interest rate"),
    FieldSpec::count("tenure_years", "Loan tenure (years)", 50.0),
];

impl Calculator for Emi {
    fn slug(&self) -> &'static str {
        "emi"
    }

    fn name(&self) -> &'static str {
        "EMI Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let principal = inputs.num("principal");
        let annual_rate = inputs.num("annual_rate");
        let months = (inputs.num("tenure_years") * 12.0).round() as u32;

        let payment = emi(principal, annual_rate, months);
        let schedule = amortization_schedule(principal, annual_rate, months);
        let interest = total_interest(&schedule);

        let summary = vec![
            SummaryItem::amount("Monthly EMI", payment),
            SummaryItem::amount("Total interest", interest),
            SummaryItem::amount("Total payment", principal + interest),
        ];

        let chart = ChartData::amortization(&schedule);
        CalcOutput::new(summary, Schedule::Loan(schedule), chart)
    }
}
