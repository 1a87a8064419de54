//! Projection engine: the shared period loop, loan amortization, and
//! comparison helpers behind all twelve calculators

mod compare;
mod engine;
mod loan;
mod schedule;
mod state;

pub use compare::{break_even, decide, round2, Decision};
pub use engine::{
    ContributionSchedule, ProjectionConfig, ProjectionEngine, StopRule, TaxTreatment,
    WithdrawalSchedule,
};
pub use loan::{amortization_schedule, emi, total_interest, LoanPeriod};
pub use schedule::{aggregate_yearly, PeriodRecord, ProjectionResult, ProjectionTotals};
pub use state::ProjectionState;
