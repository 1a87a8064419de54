//! fincalc - Projection engine behind the advisory site's calculators
//!
//! This library provides:
//! - Declarative input validation (field specs, per-field error maps)
//! - A generalized period-projection engine (growth, contributions with
//!   step-up, inflating withdrawals, tax on interest)
//! - Loan EMI and amortization schedules
//! - Break-even detection and decisions for comparison calculators
//! - Twelve calculator definitions behind one shared engine
//! - Display formatting (Indian digit grouping, word expansion)

pub mod calculators;
pub mod chart;
pub mod error;
pub mod format;
pub mod input;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use calculators::{all, by_slug, CalcOutput, Calculator, Schedule, SummaryItem, SummaryValue};
pub use error::{CalcError, ValidationErrors};
pub use input::{Constraint, FieldSpec, InputSet, ParsedInputs};
pub use projection::{PeriodRecord, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::SweepRunner;
