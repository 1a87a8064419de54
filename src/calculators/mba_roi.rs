//! MBA ROI calculator
//!
//! Cumulative career earnings with and without the MBA over a fixed
//! 50-year horizon from an assumed starting age of 22. The MBA path
//! loses two working years and pays the program cost, then restarts at
//! the post-MBA salary.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{break_even, decide, Decision};

pub struct MbaRoi;

/// Comparison horizon and assumed career start, fixed as in the site's
/// calculator rather than taken as inputs
const CAREER_HORIZON_YEARS: u32 = 50;
const CAREER_START_AGE: u32 = 22;

/// Years spent in the program, earning nothing
const PROGRAM_YEARS: u32 = 2;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("current_salary", "Current annual salary"),
    FieldSpec::amount("mba_cost", "Total MBA cost"),
    FieldSpec::amount("post_mba_salary", "Post-MBA annual salary"),
    FieldSpec::rate("salary_growth", "Salary growth without MBA"),
    FieldSpec::rate("post_mba_growth", "Salary growth after MBA"),
];

impl Calculator for MbaRoi {
    fn slug(&self) -> &'static str {
        "mba-roi"
    }

    fn name(&self) -> &'static str {
        "MBA ROI Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let current_salary = inputs.num("current_salary");
        let mba_cost = inputs.num("mba_cost");
        let post_mba_salary = inputs.num("post_mba_salary");
        let growth = inputs.num("salary_growth") / 100.0;
        let post_growth = inputs.num("post_mba_growth") / 100.0;

        let mut no_mba_salary = current_salary;
        let mut mba_salary = post_mba_salary;
        let mut no_mba_cum = 0.0;
        let mut mba_cum = 0.0;

        let mut no_mba: Vec<f64> = Vec::with_capacity(CAREER_HORIZON_YEARS as usize);
        let mut with_mba: Vec<f64> = Vec::with_capacity(CAREER_HORIZON_YEARS as usize);

        for year in 1..=CAREER_HORIZON_YEARS {
            no_mba_cum += no_mba_salary;
            no_mba_salary *= 1.0 + growth;

            if year <= PROGRAM_YEARS {
                // In the program: no earnings, fees spread over the years
                mba_cum -= mba_cost / PROGRAM_YEARS as f64;
            } else {
                mba_cum += mba_salary;
                mba_salary *= 1.0 + post_growth;
            }

            no_mba.push(no_mba_cum);
            with_mba.push(mba_cum);
        }

        let mba_total = mba_cum;
        let no_mba_total = no_mba_cum;

        let decision = decide(mba_total, no_mba_total);
        let break_even_year = break_even(&with_mba, &no_mba);

        let verdict = match decision {
            Decision::FirstOption => "The MBA pays off",
            Decision::SecondOption => "Staying the course earns more",
            Decision::NearlyEqual => "Both paths are nearly equal",
        };
        let break_even_item = match break_even_year {
            Some(year) => SummaryItem::count(
                "MBA path pulls ahead at age",
                (CAREER_START_AGE + year) as f64,
                "",
            ),
            None => SummaryItem::text("MBA path pulls ahead at age", "not reached"),
        };

        let summary = vec![
            SummaryItem::amount("Lifetime earnings with MBA", mba_total),
            SummaryItem::amount("Lifetime earnings without MBA", no_mba_total),
            break_even_item,
            SummaryItem::text("Verdict", verdict),
        ];

        let chart = ChartData::comparison("With MBA", &with_mba, "Without MBA", &no_mba);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_year)
    }
}
