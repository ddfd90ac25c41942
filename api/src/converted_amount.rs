//! Provides a display type for amounts returned by the conversion endpoint.

use std::fmt;

use crate::currency::Currency;

/// Number of fraction digits kept when a payload is rounded for display.
pub const DISPLAY_FRACTION_DIGITS: usize = 3;

/// A converted amount in a target currency, ready for display.
///
/// The value is kept as decimal digit strings taken from the payload's
/// shortest round-trip representation, so large payloads print exactly the
/// digits they were sent with. The `Display` implementation groups the
/// integer part in threes with `,` and prints at most three fraction digits
/// with trailing zeros dropped, e.g. `5,650,000` or `1,234.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAmount {
    negative: bool,
    // ASCII digits without leading zeros ("0" for zero), or "NaN"/"∞".
    integer: String,
    // At most DISPLAY_FRACTION_DIGITS digits, no trailing zeros.
    fraction: String,
    currency: Currency,
}

impl ConvertedAmount {
    /// Creates a `ConvertedAmount` from a payload float.
    ///
    /// The float is rounded half away from zero to at most three fraction
    /// digits.
    ///
    /// # Examples
    /// ```
    /// use api::converted_amount::ConvertedAmount;
    /// use api::currency::Currency;
    ///
    /// let amount = ConvertedAmount::new_from_float(1234.56789, Currency::ETB);
    /// assert_eq!(amount.to_string(), "1,234.568");
    /// ```
    pub fn new_from_float(value: f64, currency: Currency) -> Self {
        if !value.is_finite() {
            let integer = if value.is_nan() { "NaN" } else { "∞" };
            return Self {
                negative: value < 0.0,
                integer: integer.to_string(),
                fraction: String::new(),
                currency,
            };
        }

        // `Display` for f64 never uses exponent notation.
        let text = format!("{}", value.abs());
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        // Digits of the value scaled by 10^DISPLAY_FRACTION_DIGITS, truncated.
        let mut digits: Vec<u8> = integer
            .bytes()
            .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(DISPLAY_FRACTION_DIGITS))
            .map(|b| b - b'0')
            .collect();

        let round_up = fraction
            .as_bytes()
            .get(DISPLAY_FRACTION_DIGITS)
            .is_some_and(|&d| d >= b'5');
        if round_up {
            increment(&mut digits);
        }

        let split = digits.len() - DISPLAY_FRACTION_DIGITS;
        let integer: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
        let integer = match integer.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        };
        let fraction: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();
        let fraction = fraction.trim_end_matches('0').to_string();

        let is_zero = integer == "0" && fraction.is_empty();
        Self {
            negative: value < 0.0 && !is_zero,
            integer,
            fraction,
            currency,
        }
    }

    /// Formats the amount with its currency code (e.g., "5,650,000 ETB").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Adds one to a big-endian decimal digit vector, growing it on carry out.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Inserts a `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for ConvertedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&group_thousands(&self.integer))?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(value: f64) -> String {
        ConvertedAmount::new_from_float(value, Currency::ETB).to_string()
    }

    #[test]
    fn groups_whole_numbers() {
        let amount = ConvertedAmount::new_from_float(5_650_000.0, Currency::ETB);
        assert_eq!(amount.to_string(), "5,650,000");
        assert_eq!(amount.to_string_with_code(), "5,650,000 ETB");
    }

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(display(0.0), "0");
        assert_eq!(display(999.0), "999");
        assert_eq!(display(1000.0), "1,000");
    }

    #[test]
    fn rounds_to_three_fraction_digits_and_trims_zeros() {
        assert_eq!(display(1234.56789), "1,234.568");
        assert_eq!(display(0.5), "0.5");
        assert_eq!(display(12.10), "12.1");
        assert_eq!(display(0.0004), "0");
        assert_eq!(display(1.0005), "1.001");
    }

    #[test]
    fn rounding_carries_into_the_integer_part() {
        assert_eq!(display(999.9996), "1,000");
        assert_eq!(display(0.9995), "1");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(display(-1234.5), "-1,234.5");
        assert_eq!(display(-0.05), "-0.05");
    }

    #[test]
    fn large_payloads_keep_their_digits() {
        assert_eq!(display(1.0000000000000002e16), "10,000,000,000,000,002");
        assert_eq!(display(1.2345678901234568e16), "12,345,678,901,234,568");
        assert_eq!(display(1e20), "100,000,000,000,000,000,000");
        assert_eq!(
            display(1e36),
            "1,000,000,000,000,000,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn tiny_payloads_round_to_zero_without_sign() {
        assert_eq!(display(1e-7), "0");
        assert_eq!(display(-1e-7), "0");
    }

    #[test]
    fn non_finite_values_use_js_spellings() {
        assert_eq!(display(f64::NAN), "NaN");
        assert_eq!(display(f64::INFINITY), "∞");
        assert_eq!(display(f64::NEG_INFINITY), "-∞");
    }
}
