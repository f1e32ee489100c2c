//! Price rendering.
//!
//! Prices are shown the way the store's locale (es-CO, Colombian pesos) writes
//! them: `$`, a non-breaking space, `.` between thousands and no decimals.

const CURRENCY_SYMBOL: &str = "$";
const THOUSANDS_SEPARATOR: char = '.';
const NBSP: char = '\u{a0}';

/// Formats `amount` as currency text, e.g. `100000.0` → `"$ 100.000"`.
///
/// Fractions are rounded half away from zero. Non-finite input renders as zero.
pub fn format_price(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let negative = rounded < 0.0;
    // `as` saturates, so huge values cannot overflow.
    let units = rounded.abs() as u128;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{NBSP}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let formatted = format_price(0.0);
        assert!(formatted.contains('0'));
        assert_eq!(formatted, "$\u{a0}0");
    }

    #[test]
    fn test_thousands_separator_and_symbol() {
        let formatted = format_price(100000.0);
        assert!(formatted.contains("100.000"));
        assert!(formatted.contains('$'));
    }

    #[test]
    fn test_no_decimal_separator() {
        assert!(!format_price(50000.0).contains(','));
        assert_eq!(format_price(1234.56), "$\u{a0}1.235");
    }

    #[test]
    fn test_large_and_odd_values() {
        assert_eq!(format_price(1_234_567_890.0), "$\u{a0}1.234.567.890");
        assert_eq!(format_price(999.0), "$\u{a0}999");
        assert_eq!(format_price(-2500.0), "-$\u{a0}2.500");
        assert_eq!(format_price(f64::NAN), "$\u{a0}0");
        assert!(format_price(1e30).starts_with('$'));
    }
}
