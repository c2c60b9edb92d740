//! Numeric Input Handling
//!
//! Quantity and price are edited as free text. These helpers turn that text
//! into numbers the same lenient way a browser `parseFloat` does, and format
//! derived amounts with two decimals.

/// Parse the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"3 pcs"` yields `3.0`. Returns `None` when there is no numeric prefix
/// or the value is not finite.
pub fn try_parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when it has at least one digit ("2e" parses as 2)
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value: f64 = s[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse `text` as a number, treating empty or non-numeric text as zero.
pub fn parse_number(text: &str) -> f64 {
    match try_parse_number(text) {
        // Also folds -0.0 into 0.0
        Some(value) if value != 0.0 => value,
        Some(_) => 0.0,
        None => {
            if !text.trim().is_empty() {
                log::warn!("Non-numeric input {:?} treated as 0", text);
            }
            0.0
        }
    }
}

/// Fold an overflowed amount to zero and -0.0 to 0.0
pub(crate) fn normalize_amount(value: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("Amount overflowed to {}, treated as 0", value);
        return 0.0;
    }
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Format an amount with exactly two decimals.
///
/// Rounds from the exact binary value, so `2.675` (stored just below the
/// half) gives `2.67`. Exact halves such as `0.125` round away from zero.
pub fn format_amount(value: f64) -> String {
    // An exact half-cent is an odd multiple of 1/8
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() < MAX_EXACT_EIGHTHS && (eighths as i64) % 2 != 0 {
        let half_cents = eighths as i64 * 25;
        return format_cents((half_cents + half_cents.signum()) / 2);
    }

    let text = format!("{:.2}", value);
    if text == "-0.00" {
        return "0.00".to_string();
    }
    text
}

/// Above this every f64 is an integer, so no half-cents exist
const MAX_EXACT_EIGHTHS: f64 = 4_503_599_627_370_496.0;

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("2"), 2.0);
        assert_eq!(parse_number("3.5"), 3.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("  12.25"), 12.25);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-4"), -4.0);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("Infinity"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_number("3abc"), 3.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("2e+"), 2.0);
        assert_eq!(parse_number("1.5.7"), 1.5);
        assert_eq!(try_parse_number("x1"), None);
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let value = parse_number("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount(f64::INFINITY), 0.0);
        assert_eq!(normalize_amount(f64::NEG_INFINITY), 0.0);
        assert_eq!(normalize_amount(f64::NAN), 0.0);
        assert!(normalize_amount(-0.0).is_sign_positive());
        assert_eq!(normalize_amount(1e308), 1e308);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(7.0), "7.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(-0.125), "-0.13");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(10.625), "10.63");
        assert_eq!(format_amount(0.5), "0.50");
        // Binary value sits just below the half
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(2.675), "2.67");
    }
}
