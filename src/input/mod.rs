//! Input collection and validation
//!
//! Each calculator declares its fields and constraints; the validator
//! turns a raw string map into parsed numbers or a per-field error map.
//! The projection engine never runs while any error exists.

mod spec;
mod validate;

pub use spec::{Constraint, CrossRule, FieldSpec};
pub use validate::{validate, ParsedInputs};

use std::collections::BTreeMap;

/// Raw field values as typed by the user, keyed by field name.
pub type InputSet = BTreeMap<String, String>;
