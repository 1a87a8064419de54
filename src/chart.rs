//! Chart series reshaping for the chart surface
//!
//! The core generates named numeric series of consistent length; the
//! chart surface draws them. Nothing here knows financial semantics.

use serde::{Deserialize, Serialize};

use crate::projection::{LoanPeriod, PeriodRecord};

/// Hint for how the chart surface should draw the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Pie,
}

/// A single data point in a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Period number on the x axis (1-indexed)
    pub period: u32,

    /// Value on the y axis; always finite
    pub value: f64,
}

/// A named numeric series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.to_string(),
            points: values
                .into_iter()
                .enumerate()
                .map(|(idx, value)| ChartPoint { period: idx as u32 + 1, value })
                .collect(),
        }
    }
}

/// Everything the chart surface needs for one calculator result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, series: Vec::new() }
    }

    pub fn push(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Balance-over-time line from a projection schedule
    pub fn balance_line(periods: &[PeriodRecord]) -> Self {
        Self::new(ChartKind::Line).push(ChartSeries::new(
            "Balance",
            periods.iter().map(|r| r.closing_balance),
        ))
    }

    /// Invested-vs-value area pair from a projection schedule
    pub fn invested_vs_value(periods: &[PeriodRecord]) -> Self {
        let mut invested = 0.0;
        let cumulative: Vec<f64> = periods
            .iter()
            .map(|r| {
                invested += r.contribution;
                invested
            })
            .collect();
        Self::new(ChartKind::Area)
            .push(ChartSeries::new("Invested", cumulative))
            .push(ChartSeries::new(
                "Value",
                periods.iter().map(|r| r.closing_balance),
            ))
    }

    /// Two-sided comparison lines over the same period axis
    pub fn comparison(name_a: &str, a: &[f64], name_b: &str, b: &[f64]) -> Self {
        Self::new(ChartKind::Line)
            .push(ChartSeries::new(name_a, a.iter().copied()))
            .push(ChartSeries::new(name_b, b.iter().copied()))
    }

    /// Principal-vs-interest lines from an amortization schedule
    pub fn amortization(schedule: &[LoanPeriod]) -> Self {
        Self::new(ChartKind::Line)
            .push(ChartSeries::new(
                "Principal",
                schedule.iter().map(|r| r.principal),
            ))
            .push(ChartSeries::new(
                "Interest",
                schedule.iter().map(|r| r.interest),
            ))
    }
}
