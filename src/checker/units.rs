//! Decimal scaling of smallest-unit amounts.

use alloy::primitives::U256;

/// Decimals of the native coin (wei per ether).
pub const NATIVE_DECIMALS: usize = 18;

/// Scale a non-negative decimal digit string down by `10^decimals`.
///
/// Works on the digit text directly so amounts longer than a `U256` can hold
/// still format. Trailing fractional zeros are dropped but one fractional
/// digit is always kept: `"1000000000000000000"` becomes `"1.0"`.
///
/// `digits` must contain only ASCII digits.
pub fn format_units(digits: &str, decimals: usize) -> String {
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    let significant = digits.trim_start_matches('0');
    let padded = format!("{:0>width$}", significant, width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Scale a digit string by 10^18.
pub fn format_ether_digits(digits: &str) -> String {
    format_units(digits, NATIVE_DECIMALS)
}

/// Scale a wei amount by 10^18.
pub fn format_ether(wei: U256) -> String {
    format_units(&wei.to_string(), NATIVE_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ether_fractions() {
        assert_eq!(format_ether(U256::from(2_500_000_000_000_000_000u128)), "2.5");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_ether_digits("123456789012345678"), "0.123456789012345678");
        assert_eq!(format_ether_digits("123456789012345678901"), "123.456789012345678901");
    }

    #[test]
    fn test_format_ether_whole_values() {
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_ether(U256::from(1_000_000_000_000_000_000u128)), "1.0");
        assert_eq!(format_ether_digits("42000000000000000000000"), "42000.0");
    }

    #[test]
    fn test_leading_zeros_are_ignored() {
        assert_eq!(format_ether_digits("0000001500000000000000000"), "1.5");
        assert_eq!(format_ether_digits("0000000000"), "0.0");
    }

    #[test]
    fn test_beyond_u256_range() {
        let digits = format!("1{}", "0".repeat(90));
        let expected = format!("1{}.0", "0".repeat(72));

        assert_eq!(format_ether_digits(&digits), expected);
    }

    #[test]
    fn test_other_decimals() {
        assert_eq!(format_units("50000000", 6), "50.0");
        assert_eq!(format_units("1234567", 6), "1.234567");
        assert_eq!(format_units("7", 0), "7.0");
    }
}
