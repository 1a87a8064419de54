//! Raw input validation
//!
//! Pure function: raw strings in, parsed numbers or a per-field error
//! map out. Calculators only see `ParsedInputs` that passed every
//! declared constraint.

use std::collections::BTreeMap;

use super::spec::{Constraint, CrossRule, FieldSpec};
use super::InputSet;
use crate::error::ValidationErrors;

/// Validated numeric (and categorical) inputs for one calculation
#[derive(Debug, Clone, Default)]
pub struct ParsedInputs {
    numbers: BTreeMap<String, f64>,
    choices: BTreeMap<String, String>,
}

impl ParsedInputs {
    /// Value of a required numeric field. Validation guarantees
    /// presence, so a missing name reads as zero rather than panicking.
    pub fn num(&self, name: &str) -> f64 {
        self.numbers.get(name).copied().unwrap_or(0.0)
    }

    /// Value of an optional numeric field, if the user supplied one
    pub fn opt(&self, name: &str) -> Option<f64> {
        self.numbers.get(name).copied()
    }

    /// Selected option of a choice field
    pub fn choice(&self, name: &str) -> &str {
        self.choices.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Validate a raw input set against field specs and cross-field rules.
///
/// A field fails if it is absent, blank after trimming, not a finite
/// number, or outside its constraint. Cross rules only fire once both
/// of their fields parsed cleanly.
pub fn validate(
    raw: &InputSet,
    fields: &[FieldSpec],
    cross_rules: &[CrossRule],
) -> Result<ParsedInputs, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut parsed = ParsedInputs::default();

    for field in fields {
        let value = raw.get(field.name).map(|v| v.trim()).unwrap_or("");

        if value.is_empty() {
            if field.required {
                errors.add(field.name, format!("{} is required", field.label));
            }
            continue;
        }

        if let Constraint::Choice(options) = field.constraint {
            if options.contains(&value) {
                parsed.choices.insert(field.name.to_string(), value.to_string());
            } else {
                errors.add(
                    field.name,
                    format!("{} must be one of: {}", field.label, options.join(", ")),
                );
            }
            continue;
        }

        let number: f64 = match value.parse() {
            Ok(n) => n,
            Err(_) => {
                errors.add(field.name, format!("{} must be a number", field.label));
                continue;
            }
        };
        if !f64::is_finite(number) {
            errors.add(field.name, format!("{} must be a number", field.label));
            continue;
        }

        match field.constraint {
            Constraint::Amount | Constraint::Rate => {
                if number < 0.0 {
                    errors.add(field.name, format!("{} cannot be negative", field.label));
                    continue;
                }
            }
            Constraint::Count { max } => {
                if number < 0.0 {
                    errors.add(field.name, format!("{} cannot be negative", field.label));
                    continue;
                }
                if number > max {
                    errors.add(field.name, format!("{} must be at most {}", field.label, max));
                    continue;
                }
            }
            Constraint::FreeRate => {}
            Constraint::Choice(_) => unreachable!("choices handled above"),
        }

        parsed.numbers.insert(field.name.to_string(), number);
    }

    for rule in cross_rules {
        match *rule {
            CrossRule::StrictlyGreater { field, than, message } => {
                if let (Some(a), Some(b)) = (parsed.opt(field), parsed.opt(than)) {
                    if a <= b {
                        errors.add(field, message);
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}
