//! Declarative field specifications

/// Constraint applied to a single field after it parses as a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Currency amount: finite and non-negative
    Amount,
    /// Annual percentage rate: finite and non-negative
    Rate,
    /// Percentage that may be any finite real (tax-slab style fields)
    FreeRate,
    /// Whole-ish count (years, age, km) with an upper bound
    Count { max: f64 },
    /// Categorical value drawn from a fixed list
    Choice(&'static [&'static str]),
}

/// Specification of one input field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub constraint: Constraint,
    pub required: bool,
}

impl FieldSpec {
    pub const fn amount(name: &'static str, label: &'static str) -> Self {
        Self { name, label, constraint: Constraint::Amount, required: true }
    }

    pub const fn rate(name: &'static str, label: &'static str) -> Self {
        Self { name, label, constraint: Constraint::Rate, required: true }
    }

    pub const fn free_rate(name: &'static str, label: &'static str) -> Self {
        Self { name, label, constraint: Constraint::FreeRate, required: true }
    }

    pub const fn count(name: &'static str, label: &'static str, max: f64) -> Self {
        Self { name, label, constraint: Constraint::Count { max }, required: true }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self { name, label, constraint: Constraint::Choice(options), required: true }
    }

    /// Mark the field as optional; absent or blank values are skipped
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Relation between two parsed fields, checked after per-field parsing
#[derive(Debug, Clone, Copy)]
pub enum CrossRule {
    /// `field` must be strictly greater than `than`
    /// (e.g. retirement age > current age)
    StrictlyGreater {
        field: &'static str,
        than: &'static str,
        message: &'static str,
    },
}
