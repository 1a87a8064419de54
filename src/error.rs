//! Error types shared across the calculator engine

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-field validation messages.
///
/// An empty map means the input set is ready to compute. The map is
/// rebuilt from scratch on every submit attempt, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Top-level error type for the calculator engine
#[derive(Debug, Error)]
pub enum CalcError {
    /// One or more input fields failed validation; the projection was not run
    #[error("invalid input ({0})")]
    Validation(ValidationErrors),

    /// No calculator registered under the given slug
    #[error("unknown calculator '{0}'")]
    UnknownCalculator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_means_ready() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_add_replaces_prior_message() {
        let mut errors = ValidationErrors::new();
        errors.add("principal", "is required");
        errors.add("principal", "must be a number");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("principal"), Some("must be a number"));
    }

    #[test]
    fn test_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("rate", "must be a number");
        errors.add("tenure", "is required");
        let text = errors.to_string();
        assert!(text.contains("rate: must be a number"));
        assert!(text.contains("tenure: is required"));
    }
}
