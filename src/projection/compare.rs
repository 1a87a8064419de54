//! Break-even detection and decision selection for comparison
//! calculators (buy-vs-rent, fuel-vs-EV, NPS-vs-mutual-fund, ...)

use serde::{Deserialize, Serialize};

/// Outcome of comparing two scalar results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The first option comes out ahead
    FirstOption,
    /// The second option comes out ahead
    SecondOption,
    /// Equal once rounded to two decimals; favor neither
    NearlyEqual,
}

/// Round to two decimals (display precision for currency)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First 1-indexed period at which `preferred` strictly exceeds
/// `other`. An exact tie never counts; `None` means "not reached"
/// within the horizon and is never defaulted to the last period.
pub fn break_even(preferred: &[f64], other: &[f64]) -> Option<u32> {
    preferred
        .iter()
        .zip(other.iter())
        .position(|(a, b)| a > b)
        .map(|idx| idx as u32 + 1)
}

/// Pick between two final outcomes, where larger is better.
///
/// Values equal at two-decimal precision land on `NearlyEqual`; there
/// is no epsilon beyond that rounding.
pub fn decide(first: f64, second: f64) -> Decision {
    let a = round2(first);
    let b = round2(second);
    if a == b {
        Decision::NearlyEqual
    } else if a > b {
        Decision::FirstOption
    } else {
        Decision::SecondOption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_even_first_strict_overtake() {
        let a = [1.0, 2.0, 5.0, 9.0];
        let b = [2.0, 2.0, 4.0, 4.0];
        assert_eq!(break_even(&a, &b), Some(3));
    }

    #[test]
    fn test_break_even_tie_does_not_count() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0];
        assert_eq!(break_even(&a, &b), None);
    }

    #[test]
    fn test_break_even_never_defaults_to_last_period() {
        let a = [1.0, 1.0, 1.0];
        let b = [2.0, 2.0, 2.0];
        assert_eq!(break_even(&a, &b), None);
    }

    #[test]
    fn test_break_even_first_period() {
        let a = [5.0, 1.0];
        let b = [4.0, 9.0];
        assert_eq!(break_even(&a, &b), Some(1));
    }

    #[test]
    fn test_decide_strict_comparison() {
        assert_eq!(decide(100.01, 100.00), Decision::FirstOption);
        assert_eq!(decide(100.00, 100.01), Decision::SecondOption);
    }

    #[test]
    fn test_decide_nearly_equal_at_two_decimals() {
        assert_eq!(decide(100.004, 100.001), Decision::NearlyEqual);
        assert_eq!(decide(1_000_000.0, 1_000_000.0), Decision::NearlyEqual);
    }
}
