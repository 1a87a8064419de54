//! Buy vs rent comparison
//!
//! Two parallel year-wise net-worth projections over the loan tenure.
//! The buyer builds equity in an appreciating home while paying down
//! the loan; the renter invests the down payment plus whatever the EMI
//! exceeds the (inflating) rent by each month.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{amortization_schedule, break_even, decide, emi, Decision};

pub struct BuyVsRent;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("home_price", "Home price"),
    FieldSpec::amount("down_payment", "Down payment"),
    FieldSpec::rate("loan_rate", "Home loan rate"),
    FieldSpec::count("loan_tenure_years", "Loan tenure (years)", 30.0),
    FieldSpec::amount("monthly_rent", "Monthly rent"),
    FieldSpec::rate("rent_inflation", "Rent inflation"),
    FieldSpec::rate("property_appreciation", "Property appreciation"),
    FieldSpec::rate("investment_return", "Investment return"),
];

impl Calculator for BuyVsRent {
    fn slug(&self) -> &'static str {
        "buy-vs-rent"
    }

    fn name(&self) -> &'static str {
        "Buy vs Rent Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let home_price = inputs.num("home_price");
        let down_payment = inputs.num("down_payment").min(home_price);
        let loan_rate = inputs.num("loan_rate");
        let years = inputs.num("loan_tenure_years").round().max(1.0) as u32;
        let monthly_rent = inputs.num("monthly_rent");
        let rent_inflation = inputs.num("rent_inflation") / 100.0;
        let appreciation = inputs.num("property_appreciation") / 100.0;
        let investment_return = inputs.num("investment_return") / 100.0;

        let principal = home_price - down_payment;
        let months = years * 12;
        let payment = emi(principal, loan_rate, months);
        let loan = amortization_schedule(principal, loan_rate, months);

        let monthly_return = investment_return / 12.0;
        let mut home_value = home_price;
        let mut rent = monthly_rent;
        let mut renter_balance = down_payment;

        let mut buying: Vec<f64> = Vec::with_capacity(years as usize);
        let mut renting: Vec<f64> = Vec::with_capacity(years as usize);

        for year in 1..=years {
            home_value *= 1.0 + appreciation;

            // The renter invests the monthly EMI-vs-rent difference;
            // a negative difference draws the investment down
            for _ in 0..12 {
                let surplus = payment - rent;
                renter_balance = (renter_balance + surplus) * (1.0 + monthly_return);
            }
            rent *= 1.0 + rent_inflation;

            let outstanding = loan
                .get((year * 12) as usize - 1)
                .map(|row| row.closing_balance)
                .unwrap_or(0.0);

            buying.push(home_value - outstanding);
            renting.push(renter_balance);
        }

        let buying_net_worth = buying.last().copied().unwrap_or(0.0);
        let renting_net_worth = renting.last().copied().unwrap_or(0.0);

        let decision = decide(buying_net_worth, renting_net_worth);
        let break_even_year = break_even(&buying, &renting);

        let verdict = match decision {
            Decision::FirstOption => "Buying is better",
            Decision::SecondOption => "Renting is better",
            Decision::NearlyEqual => "Both options are nearly equal",
        };
        let break_even_item = match break_even_year {
            Some(year) => SummaryItem::count("Buying overtakes renting in", year as f64, "years"),
            None => SummaryItem::text("Buying overtakes renting in", "not reached"),
        };

        let summary = vec![
            SummaryItem::amount("Net worth if you buy", buying_net_worth),
            SummaryItem::amount("Net worth if you rent", renting_net_worth),
            SummaryItem::amount("Monthly EMI", payment),
            break_even_item,
            SummaryItem::text("Verdict", verdict),
        ];

        let chart = ChartData::comparison("Buying", &buying, "Renting", &renting);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_year)
    }
}
