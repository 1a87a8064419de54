//! NPS vs mutual fund comparison
//!
//! Both sides run the same monthly SIP at their own expected return.
//! The NPS side additionally folds the yearly 80CCD(1B) tax saving into
//! its corpus, where it keeps compounding. The summary also reports the
//! cumulative tax saved on its own line so the conflation is visible.

use super::{CalcOutput, Calculator, Schedule, SummaryItem};
use crate::chart::ChartData;
use crate::input::{FieldSpec, ParsedInputs};
use crate::projection::{
    aggregate_yearly, break_even, decide, ContributionSchedule, Decision, ProjectionConfig,
    ProjectionEngine,
};

pub struct NpsVsMutualFund;

/// 80CCD(1B) additional deduction limit per year
const NPS_DEDUCTION_LIMIT: f64 = 50_000.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::amount("monthly_investment", "Monthly investment"),
    FieldSpec::count("years", "Investment horizon (years)", 40.0),
    FieldSpec::rate("nps_return", "NPS expected return"),
    FieldSpec::rate("mf_return", "Mutual fund expected return"),
    FieldSpec::rate("tax_slab", "Tax slab"),
];

/// Year-end corpus series for a monthly SIP
fn sip_yearly_balances(monthly: f64, annual_return_pct: f64, years: u32) -> Vec<f64> {
    let config = ProjectionConfig::monthly(0.0, annual_return_pct, years * 12)
        .with_contribution(ContributionSchedule::flat(monthly));
    let result = ProjectionEngine::new(config).run();
    aggregate_yearly(&result.periods)
        .iter()
        .map(|row| row.closing_balance)
        .collect()
}

impl Calculator for NpsVsMutualFund {
    fn slug(&self) -> &'static str {
        "nps-vs-mf"
    }

    fn name(&self) -> &'static str {
        "NPS vs Mutual Fund Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn compute(&self, inputs: &ParsedInputs) -> CalcOutput {
        let monthly = inputs.num("monthly_investment");
        let years = inputs.num("years").round().max(1.0) as u32;
        let nps_return = inputs.num("nps_return");
        let mf_return = inputs.num("mf_return");
        let tax_slab = inputs.num("tax_slab");

        let annual_tax_saved = (monthly * 12.0).min(NPS_DEDUCTION_LIMIT) * tax_slab / 100.0;

        let nps_sip = sip_yearly_balances(monthly, nps_return, years);
        let mf_series = sip_yearly_balances(monthly, mf_return, years);

        // Tax savings land once a year and then grow with the NPS corpus
        let tax_config = ProjectionConfig::yearly(0.0, nps_return, years)
            .with_contribution(ContributionSchedule::flat(annual_tax_saved));
        let tax_result = ProjectionEngine::new(tax_config).run();
        let tax_balances = tax_result.balances();

        let nps_series: Vec<f64> = nps_sip
            .iter()
            .zip(tax_balances.iter())
            .map(|(sip, tax)| sip + tax)
            .collect();

        let nps_corpus = nps_series.last().copied().unwrap_or(0.0);
        let mf_corpus = mf_series.last().copied().unwrap_or(0.0);
        let invested = monthly * 12.0 * years as f64;

        let decision = decide(nps_corpus, mf_corpus);
        let break_even_year = break_even(&nps_series, &mf_series);

        let verdict = match decision {
            Decision::FirstOption => "NPS comes out ahead",
            Decision::SecondOption => "Mutual funds come out ahead",
            Decision::NearlyEqual => "Both options are nearly equal",
        };

        let summary = vec![
            SummaryItem::amount("Total invested", invested),
            SummaryItem::amount("NPS corpus (with tax benefit)", nps_corpus),
            SummaryItem::amount("Mutual fund corpus", mf_corpus),
            SummaryItem::amount("Tax saved over the years", annual_tax_saved * years as f64),
            SummaryItem::text("Verdict", verdict),
        ];

        let chart = ChartData::comparison("NPS", &nps_series, "Mutual fund", &mf_series);
        CalcOutput::new(summary, Schedule::None, chart).with_decision(decision, break_even_year)
    }
}
