//! Utility functions for formatting amounts in terminal output
//!
//! JSON output never goes through here; these helpers only shape the
//! human-readable table view.

use rust_decimal::{Decimal, RoundingStrategy};

/// Insert `separator` every three digits of an unsigned digit string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped.into_iter().rev().collect()
}

/// Format an amount with two decimal places and thousands separators.
///
/// Values are rounded half away from zero, like the tax itself.
///
/// # Examples
/// ```
/// use capital_gains::utils::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234.5)), "1,234.50");
/// assert_eq!(format_amount(dec!(-40000)), "-40,000.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}.{}",
        sign,
        group_thousands(integer_part, ','),
        decimal_part
    )
}

/// Format a share quantity with thousands separators: "-1,500"
pub fn format_quantity(quantity: i64) -> String {
    let sign = if quantity < 0 { "-" } else { "" };
    format!(
        "{}{}",
        sign,
        group_thousands(&quantity.unsigned_abs().to_string(), ',')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_basic() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
        assert_eq!(format_amount(dec!(999.99)), "999.99");
        assert_eq!(format_amount(dec!(1000)), "1,000.00");
        assert_eq!(format_amount(dec!(12345678.9)), "12,345,678.90");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(dec!(6.666666)), "6.67");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec!(-1234.56)), "-1,234.56");
        assert_eq!(format_amount(dec!(-25000)), "-25,000.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(650), "650");
        assert_eq!(format_quantity(10000), "10,000");
        assert_eq!(format_quantity(-1500), "-1,500");
    }
}
