//! Fuel vs EV comparison
//!
//! The EV costs more up front but less per kilometre. Month by month,
//! cumulative spend on each side (purchase price plus running cost,
//! with fuel prices inflating faster than electricity) decides when the
//! EV's premium pays for itself.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{break_even, decide, Decision};

pub struct FuelVsEv;

/// Comparison horizon in months (15 years, a typical vehicle life)
const HORIZON_MONTHS: u32 = 180;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("ev_price", "EV price"),
    FieldSpec::amount("petrol_price", "Petrol car price"),
    FieldSpec::count("monthly_km", "Monthly running (km)", 10_000.0),
    FieldSpec::amount("fuel_cost_per_km", "Fuel cost per km"),
    FieldSpec::amount("ev_cost_per_km", "Electricity cost per km"),
    FieldSpec::rate("fuel_inflation", "Fuel price inflation"),
    FieldSpec::rate("electricity_inflation", "Electricity price inflation").optional(),
];

impl Calculator for FuelVsEv {
    fn slug(&self) -> &'static str {
        "fuel-vs-ev"
    }

    fn name(&self) -> &'static str {
        "Fuel vs EV Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let ev_price = inputs.num("ev_price");
        let petrol_price = inputs.num("petrol_price");
        let monthly_km = inputs.num("monthly_km");
        let mut fuel_per_km = inputs.num("fuel_cost_per_km");
        let mut ev_per_km = inputs.num("ev_cost_per_km");
        let fuel_inflation = inputs.num("fuel_inflation") / 100.0;
        let electricity_inflation = inputs.opt("electricity_inflation").unwrap_or(3.0) / 100.0;

        let mut petrol_cum = petrol_price;
        let mut ev_cum = ev_price;
        let mut petrol_cost: Vec<f64> = Vec::with_capacity(HORIZON_MONTHS as usize);
        let mut ev_cost: Vec<f64> = Vec::with_capacity(HORIZON_MONTHS as usize);

        for month in 1..=HORIZON_MONTHS {
            petrol_cum += monthly_km * fuel_per_km;
            ev_cum += monthly_km * ev_per_km;
            petrol_cost.push(petrol_cum);
            ev_cost.push(ev_cum);

            // Per-km prices inflate at each year boundary
            if month % 12 == 0 {
                fuel_per_km *= 1.0 + fuel_inflation;
                ev_per_km *= 1.0 + electricity_inflation;
            }
        }

        let petrol_total = petrol_cum;
        let ev_total = ev_cum;

        // Larger total cost loses: FirstOption here reads "petrol
        // costs more", i.e. the EV wins
        let decision = decide(petrol_total, ev_total);
        // First month the petrol car's cumulative spend exceeds the EV's
        let break_even_month = break_even(&petrol_cost, &ev_cost);

        let verdict = match decision {
            Decision::FirstOption => "The EV is cheaper over its life",
            Decision::SecondOption => "The petrol car stays cheaper",
            Decision::NearlyEqual => "Both options are nearly equal",
        };
        let break_even_item = match break_even_month {
            Some(month) => {
                SummaryItem::count("EV premium recovered in", month as f64, "months")
            }
            None => SummaryItem::text("EV premium recovered in", "not reached"),
        };

        let summary = vec![
            SummaryItem::amount("Total cost with petrol", petrol_total),
            SummaryItem::amount("Total cost with EV", ev_total),
            SummaryItem::amount("Price premium paid for the EV", ev_price - petrol_price),
            break_even_item,
            SummaryItem::text("Verdict", verdict),
        ];

        let chart = ChartData::comparison("Petrol", &petrol_cost, "EV", &ev_cost);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_month)
    }
}
