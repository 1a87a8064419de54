//! Indian-convention digit grouping

/// Group an integer with Indian separators: last three digits, then
/// pairs. `1234567` becomes `"12,34,567"`.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let mut idx = head.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        groups.push(head[start..idx].to_string());
        idx = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format a currency amount for display, rounded to whole rupees.
///
/// Amounts here are whole-rupee magnitudes; fractional paise are never
/// displayed. Negative values only arise transiently in comparisons and
/// are rendered with a leading minus.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-₹{}", group_indian((-rounded) as u64))
    } else {
        format!("₹{}", group_indian(rounded as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_small_numbers_unchanged() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
    }

    #[test]
    fn test_grouping_thousands_and_lakhs() {
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(12_500), "12,500");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(1_234_567), "12,34,567");
    }

    #[test]
    fn test_grouping_crores() {
        assert_eq!(group_indian(10_000_000), "1,00,00,000");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
        assert_eq!(group_indian(1_234_567_890), "1,23,45,67,890");
    }

    #[test]
    fn test_format_inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(1_234_567.4), "₹12,34,567");
        assert_eq!(format_inr(1_234_567.6), "₹12,34,568");
        assert_eq!(format_inr(0.0), "₹0");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(-1_500.0), "-₹1,500");
    }
}
