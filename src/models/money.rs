//! Currency formatting
//!
//! Amounts are stored as `f64` (the SQLite column is REAL); this module only
//! deals with presenting them, rounded to cents with thousands separators.

/// Currency symbol used when no settings are involved
pub const DEFAULT_CURRENCY: &str = "₹";

/// Format an amount with a currency symbol, e.g. `₹1,234.50`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Insert `,` between every group of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Round to 2 decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "₹"), "₹0.00");
        assert_eq!(format_amount(5.0, "$"), "$5.00");
        assert_eq!(format_amount(1234.5, "₹"), "₹1,234.50");
        assert_eq!(format_amount(1234567.891, "₹"), "₹1,234,567.89");
        assert_eq!(format_amount(-42.0, "$"), "-$42.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(120.7106781), 120.71);
        assert_eq!(round2(29.289), 29.29);
    }
}
