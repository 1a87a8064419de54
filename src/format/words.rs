//! Word expansion on the Indian numbering scale
//!
//! Decomposes values by crore (10,000,000), lakh (100,000), thousand and
//! hundred, e.g. `1_250_000` reads "Twelve Lakh Fifty Thousand Rupees".

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;

/// Words for 0..=99
fn two_digit_words(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, ONES[(n % 10) as usize])
        }
    }
}

/// Words for 0..=999
fn three_digit_words(n: u64) -> String {
    debug_assert!(n < 1000);
    if n < 100 {
        two_digit_words(n)
    } else if n % 100 == 0 {
        format!("{} Hundred", ONES[(n / 100) as usize])
    } else {
        format!(
            "{} Hundred {}",
            ONES[(n / 100) as usize],
            two_digit_words(n % 100)
        )
    }
}

/// Expand a whole number on the crore/lakh/thousand/hundred scale.
/// The crore count recurses, so 123 crore reads "One Hundred Twenty
/// Three Crore".
fn integer_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;

    if rest >= CRORE {
        parts.push(format!("{} Crore", integer_words(rest / CRORE)));
        rest %= CRORE;
    }
    if rest >= LAKH {
        parts.push(format!("{} Lakh", two_digit_words(rest / LAKH)));
        rest %= LAKH;
    }
    if rest >= 1000 {
        parts.push(format!("{} Thousand", two_digit_words(rest / 1000)));
        rest %= 1000;
    }
    if rest > 0 {
        parts.push(three_digit_words(rest));
    }

    parts.join(" ")
}

/// Expand a currency amount to words, rounded to whole rupees.
pub fn amount_in_words(amount: f64) -> String {
    let rupees = amount.round().max(0.0) as u64;
    format!("{} Rupees", integer_words(rupees))
}

/// Expand a percentage to words with at most one decimal digit.
///
/// Integer values carry no "point": `percent_in_words(12.0)` reads
/// "Twelve percent", `percent_in_words(7.5)` reads "Seven point Five
/// percent".
pub fn percent_in_words(percent: f64) -> String {
    let scaled = (percent.abs() * 10.0).round() as u64;
    let whole = scaled / 10;
    let tenth = scaled % 10;

    if tenth == 0 {
        format!("{} percent", integer_words(whole))
    } else {
        format!(
            "{} point {} percent",
            integer_words(whole),
            ONES[tenth as usize]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(integer_words(0), "Zero");
        assert_eq!(integer_words(7), "Seven");
        assert_eq!(integer_words(19), "Nineteen");
        assert_eq!(integer_words(42), "Forty Two");
        assert_eq!(integer_words(300), "Three Hundred");
        assert_eq!(integer_words(512), "Five Hundred Twelve");
    }

    #[test]
    fn test_lakh_scale() {
        assert_eq!(integer_words(1_250_000), "Twelve Lakh Fifty Thousand");
        let words = amount_in_words(1_234_567.0);
        assert_eq!(words.matches("Lakh").count(), 1);
        assert_eq!(words.matches("Crore").count(), 0);
        assert!(words.ends_with("Rupees"));
    }

    #[test]
    fn test_crore_scale() {
        let words = amount_in_words(12_345_678.0);
        assert_eq!(words.matches("Crore").count(), 1);
        assert_eq!(
            integer_words(10_000_000),
            "One Crore"
        );
        assert_eq!(
            integer_words(1_230_000_000),
            "One Hundred Twenty Three Crore"
        );
    }

    #[test]
    fn test_full_decomposition() {
        assert_eq!(
            integer_words(12_34_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn test_percent_integer_has_no_point() {
        assert_eq!(percent_in_words(12.0), "Twelve percent");
        assert!(!percent_in_words(8.0).contains("point"));
    }

    #[test]
    fn test_percent_one_decimal() {
        let words = percent_in_words(7.5);
        assert_eq!(words, "Seven point Five percent");
        assert_eq!(words.matches("point").count(), 1);
        assert_eq!(percent_in_words(12.5), "Twelve point Five percent");
    }

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        // 9.95 rounds up to 10.0, which drops the fractional word
        assert_eq!(percent_in_words(9.95), "Ten percent");
        assert_eq!(percent_in_words(9.94), "Nine point Nine percent");
    }
}
