//! Car ownership vs daily commute comparison
//!
//! Cumulative cost of owning (EMI plus running costs, net of the car's
//! depreciating resale value) against cumulative commute spend, year by
//! year. Lower cumulative cost wins.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{break_even, decide, emi, Decision};

pub struct CarVsCommute;

/// Annual depreciation on the car's resale value
const DEPRECIATION_PCT: f64 = 15.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("car_price", "Car price"),
    FieldSpec::amount("down_payment", "Down payment"),
    FieldSpec::rate("loan_rate", "Car loan rate"),
    FieldSpec::count("loan_tenure_years", "Loan tenure (years)", 10.0),
    FieldSpec::amount("monthly_running_cost", "Monthly fuel and maintenance"),
    FieldSpec::amount("monthly_commute_cost", "Monthly commute spend"),
    FieldSpec::count("horizon_years", "Comparison horizon (years)", 30.0),
];

impl Calculator for CarVsCommute {
    fn slug(&self) -> &'static str {
        "car-vs-commute"
    }

    fn name(&self) -> &'static str {
        "Car vs Commute Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let car_price = inputs.num("car_price");
        let down_payment = inputs.num("down_payment").min(car_price);
        let loan_rate = inputs.num("loan_rate");
        let tenure_years = inputs.num("loan_tenure_years").round() as u32;
        let running = inputs.num("monthly_running_cost");
        let commute = inputs.num("monthly_commute_cost");
        let horizon = inputs.num("horizon_years").round().max(1.0) as u32;

        let payment = emi(car_price - down_payment, loan_rate, tenure_years * 12);

        let mut resale_value = car_price;
        let mut own_outlay = down_payment;
        let mut own_cost: Vec<f64> = Vec::with_capacity(horizon as usize);
        let mut commute_cost: Vec<f64> = Vec::with_capacity(horizon as usize);

        // Series track gross cumulative outlay; the resale value only
        // offsets the final totals, so the break-even read stays
        // monotone
        for year in 1..=horizon {
            if year <= tenure_years {
                own_outlay += payment * 12.0;
            }
            own_outlay += running * 12.0;
            resale_value *= 1.0 - DEPRECIATION_PCT / 100.0;

            own_cost.push(own_outlay);
            commute_cost.push(commute * 12.0 * year as f64);
        }

        let own_total = own_cost.last().copied().unwrap_or(0.0) - resale_value;
        let commute_total = commute_cost.last().copied().unwrap_or(0.0);

        // Larger total cost loses: FirstOption here means the car costs
        // more, i.e. commuting wins
        let decision = match decide(own_total, commute_total) {
            Decision::FirstOption => Decision::SecondOption,
            Decision::SecondOption => Decision::FirstOption,
            Decision::NearlyEqual => Decision::NearlyEqual,
        };
        // First year the commute's cumulative spend exceeds the car's
        let break_even_year = break_even(&commute_cost, &own_cost);

        let verdict = match decision {
            Decision::FirstOption => "Owning the car is cheaper",
            Decision::SecondOption => "Commuting is cheaper",
            Decision::NearlyEqual => "Both options are nearly equal",
        };
        let break_even_item = match break_even_year {
            Some(year) => SummaryItem::count("Car pays for itself in", year as f64, "years"),
            None => SummaryItem::text("Car pays for itself in", "not reached"),
        };

        let summary = vec![
            SummaryItem::amount("Cost of owning", own_total),
            SummaryItem::amount("Cost of commuting", commute_total),
            SummaryItem::amount("Monthly EMI", payment),
            break_even_item,
            SummaryItem::text("Verdict", verdict),
        ];

        let chart = ChartData::comparison("Owning", &own_cost, "Commuting", &commute_cost);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSet;

    fn raw(pairs: &[(&str, &str)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_expensive_commute_favors_car() {
        let output = CarVsCommute
            .run(&raw(&[
                ("car_price", "800000"),
                ("down_payment", "200000"),
                ("loan_rate", "9"),
                ("loan_tenure_years", "5"),
                ("monthly_running_cost", "6000"),
                ("monthly_commute_cost", "25000"),
                ("horizon_years", "10"),
            ]))
            .unwrap();

        assert_eq!(output.decision, Some(Decision::FirstOption));
        assert!(output.break_even_period.is_some());
    }

    #[test]
    fn test_cheap_commute_favors_commuting() {
        let output = CarVsCommute
            .run(&raw(&[
                ("car_price", "1200000"),
                ("down_payment", "300000"),
                ("loan_rate", "9.5"),
                ("loan_tenure_years", "5"),
                ("monthly_running_cost", "9000"),
                ("monthly_commute_cost", "3000"),
                ("horizon_years", "10"),
            ]))
            .unwrap();

        assert_eq!(output.decision, Some(Decision::SecondOption));
        assert_eq!(output.break_even_period, None);
    }

    #[test]
    fn test_series_cover_horizon() {
        let output = CarVsCommute
            .run(&raw(&[
                ("car_price", "800000"),
                ("down_payment", "100000"),
                ("loan_rate", "9"),
                ("loan_tenure_years", "5"),
                ("monthly_running_cost", "6000"),
                ("monthly_commute_cost", "12000"),
                ("horizon_years", "8"),
            ]))
            .unwrap();
        assert_eq!(output.chart.series[0].points.len(), 8);
    }
}
