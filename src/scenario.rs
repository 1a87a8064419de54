//! Sensitivity sweep runner
//!
//! Re-runs one calculator across a grid of values for a single field
//! (e.g. expected return from 6% to 14%) so the site can show how the
//! headline number moves. Runs are independent and execute in parallel.

use rayon::prelude::*;

use crate::calculators::{by_slug, CalcOutput, Calculator, SummaryValue};
use crate::error::CalcError;
use crate::input::InputSet;

/// One point of a sweep: the swept value and the run it produced
#[derive(Debug)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: Result<CalcOutput, CalcError>,
}

/// Pre-resolved calculator for running many variations of one input set
pub struct SweepRunner {
    calculator: Box<dyn Calculator>,
}

impl SweepRunner {
    pub fn new(slug: &str) -> Result<Self, CalcError> {
        Ok(Self { calculator: by_slug(slug)? })
    }

    pub fn with_calculator(calculator: Box<dyn Calculator>) -> Self {
        Self { calculator }
    }

    /// Run the calculator once per value, overriding `field` each time
    pub fn sweep(&self, base: &InputSet, field: &str, values: &[f64]) -> Vec<SweepPoint> {
        log::info!(
            "sweeping {} over {} values of '{}'",
            self.calculator.slug(),
            values.len(),
            field
        );

        values
            .par_iter()
            .map(|&value| {
                let mut raw = base.clone();
                raw.insert(field.to_string(), value.to_string());
                SweepPoint { value, outcome: self.calculator.run(&raw) }
            })
            .collect()
    }
}

/// Evenly spaced grid from `start` to `end` inclusive
pub fn value_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if step <= 0.0 {
        return values;
    }
    let mut v = start;
    while v <= end + 1e-9 {
        values.push(v);
        v += step;
    }
    values
}

/// The last currency amount in a result's summary; the headline number
/// a sensitivity chart tracks
pub fn headline_amount(output: &CalcOutput) -> Option<f64> {
    output.summary.iter().rev().find_map(|item| match item.value {
        SummaryValue::Amount(v) => Some(v),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_value_grid() {
        assert_eq!(value_grid(6.0, 8.0, 1.0), vec![6.0, 7.0, 8.0]);
        assert!(value_grid(6.0, 8.0, 0.0).is_empty());
    }

    #[test]
    fn test_sweep_emi_total_rises_with_rate() {
        let runner = SweepRunner::new("emi").unwrap();
        let base = raw(&[
            ("principal", "500000"),
            ("annual_rate", "9.5"),
            ("tenure_years", "5"),
        ]);
        let points = runner.sweep(&base, "annual_rate", &[0.0, 5.0, 10.0]);

        assert_eq!(points.len(), 3);
        let totals: Vec<f64> = points
            .iter()
            .map(|p| headline_amount(p.outcome.as_ref().unwrap()).unwrap())
            .collect();
        assert!(totals[0] < totals[1] && totals[1] < totals[2]);
        // Zero rate: total payment is exactly the principal
        assert_eq!(totals[0], 500_000.0);
    }

    #[test]
    fn test_with_calculator_bypasses_registry() {
        let runner = SweepRunner::with_calculator(Box::new(crate::calculators::Emi));
        let base = raw(&[("principal", "500000"), ("tenure_years", "5")]);
        let points = runner.sweep(&base, "annual_rate", &[8.0]);

        assert_eq!(points.len(), 1);
        assert!(points[0].outcome.is_ok());
    }

    #[test]
    fn test_sweep_reports_per_point_validation() {
        let runner = SweepRunner::new("emi").unwrap();
        let base = raw(&[("principal", "500000"), ("tenure_years", "5")]);
        let points = runner.sweep(&base, "annual_rate", &[-1.0, 5.0]);

        assert!(points[0].outcome.is_err());
        assert!(points[1].outcome.is_ok());
    }
}
