//! The twelve calculator definitions
//!
//! Each calculator supplies its field list, constraints and step
//! composition; the shared projection engine does the arithmetic. The
//! pipeline per submit is: validate -> compute -> format, with no state
//! carried between runs.

mod buy_vs_rent;
mod car_vs_commute;
mod emi;
mod endowment_vs_term;
mod fd_rd;
mod fire;
mod first_crore;
mod fuel_vs_ev;
mod mba_roi;
mod nps_vs_mf;
mod salary;
mod ssy;

pub use buy_vs_rent::BuyVsRent;
pub use car_vs_commute::CarVsCommute;
pub use emi::Emi;
pub use endowment_vs_term::EndowmentVsTerm;
pub use fd_rd::FdRd;
pub use fire::Fire;
pub use first_crore::FirstCrore;
pub use fuel_vs_ev::FuelVsEv;
pub use mba_roi::MbaRoi;
pub use nps_vs_mf::NpsVsMutualFund;
pub use salary::Salary;
pub use ssy::SukanyaSamriddhi;

use serde::{Deserialize, Serialize};

use crate::chart::ChartData;
use crate::error::CalcError;
use crate::format::{amount_in_words, format_inr, percent_in_words};
use crate::input::{validate, CrossRule, FieldSpec, InputSet, ParsedInputs};
use crate::projection::{Decision, LoanPeriod, PeriodRecord};

/// One labelled scalar outcome in a result summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryItem {
    pub label: String,
    pub value: SummaryValue,
}

/// The kinds of scalar a summary can carry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryValue {
    /// Currency amount in whole rupees
    Amount(f64),
    /// Percentage
    Percent(f64),
    /// Dimensioned count, e.g. years or months
    Count { value: f64, unit: String },
    /// Free text, e.g. a recommendation
    Text(String),
}

impl SummaryItem {
    pub fn amount(label: &str, value: f64) -> Self {
        Self { label: label.to_string(), value: SummaryValue::Amount(value) }
    }

    pub fn percent(label: &str, value: f64) -> Self {
        Self { label: label.to_string(), value: SummaryValue::Percent(value) }
    }

    pub fn count(label: &str, value: f64, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            value: SummaryValue::Count { value, unit: unit.to_string() },
        }
    }

    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self { label: label.to_string(), value: SummaryValue::Text(value.into()) }
    }

    /// Display string for the rendering surface; amounts carry both the
    /// grouped numeral and the word expansion
    pub fn display(&self) -> String {
        match &self.value {
            SummaryValue::Amount(v) => format!("{} ({})", format_inr(*v), amount_in_words(*v)),
            SummaryValue::Percent(v) => format!("{}% ({})", v, percent_in_words(*v)),
            SummaryValue::Count { value, unit } => format!("{value} {unit}"),
            SummaryValue::Text(text) => text.clone(),
        }
    }
}

/// The table attached to a result, when the calculator produces one
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "rows")]
pub enum Schedule {
    /// No tabular output (summary-only calculators)
    None,
    /// Year-wise or month-wise projection rows
    Periods(Vec<PeriodRecord>),
    /// Loan amortization rows
    Loan(Vec<LoanPeriod>),
}

/// Everything one calculation produces: summary scalars, the optional
/// table, chart series and (for comparisons) the decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcOutput {
    pub summary: Vec<SummaryItem>,
    pub schedule: Schedule,
    pub chart: ChartData,
    pub decision: Option<Decision>,
    pub break_even_period: Option<u32>,
}

impl CalcOutput {
    pub fn new(summary: Vec<SummaryItem>, schedule: Schedule, chart: ChartData) -> Self {
        Self { summary, schedule, chart, decision: None, break_even_period: None }
    }

    pub fn with_decision(mut self, decision: Decision, break_even: Option<u32>) -> Self {
        self.decision = Some(decision);
        self.break_even_period = break_even;
        self
    }
}

/// A calculator definition: field list, constraints and computation
pub trait Calculator: Sync + Send {
    /// Stable identifier used by the CLI and the rendering surface
    fn slug(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    fn cross_rules(&self) -> &'static [CrossRule] {
        &[]
    }

    /// Compute from fully validated inputs
    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput;

    /// Validate raw inputs and compute; the projection never runs while
    /// any validation error exists
    fn run(&self, raw: &InputSet) -> Result<CalcOutput, CalcError> {
        let parsed =
            validate(raw, self.fields(), self.cross_rules()).map_err(CalcError::Validation)?;
        Ok(self.compute(&parsed))
    }
}

/// All registered calculators, in site order
pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(Emi),
        Box::new(FdRd),
        Box::new(Fire),
        Box::new(BuyVsRent),
        Box::new(CarVsCommute),
        Box::new(NpsVsMutualFund),
        Box::new(Salary),
        Box::new(EndowmentVsTerm),
        Box::new(SukanyaSamriddhi),
        Box::new(FirstCrore),
        Box::new(MbaRoi),
        Box::new(FuelVsEv),
    ]
}

/// Look up a calculator by slug
pub fn by_slug(slug: &str) -> Result<Box<dyn Calculator>, CalcError> {
    all()
        .into_iter()
        .find(|c| c.slug() == slug)
        .ok_or_else(|| CalcError::UnknownCalculator(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_twelve_calculators() {
        assert_eq!(all().len(), 12);
    }

    #[test]
    fn test_slugs_are_unique() {
        let calculators = all();
        let mut slugs: Vec<_> = calculators.iter().map(|c| c.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), calculators.len());
    }

    #[test]
    fn test_by_slug_unknown() {
        assert!(matches!(
            by_slug("lottery"),
            Err(CalcError::UnknownCalculator(_))
        ));
    }

    #[test]
    fn test_summary_amount_display_carries_words() {
        let item = SummaryItem::amount("Maturity value", 1_250_000.0);
        let display = item.display();
        assert!(display.contains("₹12,50,000"));
        assert!(display.contains("Twelve Lakh Fifty Thousand Rupees"));
    }
}
