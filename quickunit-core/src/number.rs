//! Numeric primitives for converter input and output
//!
//! Input text is read with lenient "float prefix" semantics: whatever
//! well-formed number starts the string is taken, the rest is ignored.
//! Output is rounded half away from zero on the scaled value, then printed
//! with a fixed number of decimals.

use thiserror::Error;

/// Decimal places every converted result is rounded to
pub const DECIMAL_PLACES: u32 = 4;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0:?}")]
    ParseError(String),

    #[error("Not a finite number: {0}")]
    NonFinite(f64),
}

/// Parse the numeric prefix of `text`.
///
/// Supports: "42", "-3.5", ".5", "5.", "1.5e3", "12abc" (-> 12),
/// "1e" (-> 1), "Infinity", "-Infinity".
/// Leading whitespace is skipped; an empty or non-numeric prefix is an error.
pub fn parse_leading_float(text: &str) -> Result<f64, NumberError> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut literal = String::new();

    if let Some(&c) = bytes.first() {
        if c == b'+' || c == b'-' {
            if c == b'-' {
                literal.push('-');
            }
            pos += 1;
        }
    }

    if s[pos..].starts_with("Infinity") {
        return Ok(if literal.is_empty() { f64::INFINITY } else { f64::NEG_INFINITY });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(NumberError::ParseError(text.to_string()));
    }

    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }

    // Exponent only counts when at least one digit follows the marker
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let sign_at = pos + 1;
        let mut end = sign_at;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            literal.push('e');
            literal.push_str(&s[sign_at..end]);
        }
    }

    literal
        .parse::<f64>()
        .map_err(|_| NumberError::ParseError(text.to_string()))
}

/// Parse the numeric prefix of `text` and require a finite result.
pub fn parse_finite(text: &str) -> Result<f64, NumberError> {
    let value = parse_leading_float(text)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::NonFinite(value))
    }
}

/// Round to `places` decimals, halves away from zero.
///
/// The rule is applied to the scaled binary value (`x * 10^places`), so
/// 1.03125 becomes 1.0313 and -1.03125 becomes -1.0313. If scaling
/// overflows the input is returned unchanged. Negative zero comes back as 0.
///
/// Scaling can itself round: 0.00045 is stored slightly below the half, yet
/// `0.00045 * 10^4` is exactly 4.5, so the result is 0.0005 rather than the
/// 0.0004 that rounding the exact binary value would give.
pub fn round_half_away(x: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round with [`round_half_away`] and print exactly `places` decimals.
pub fn to_fixed(x: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_half_away(x, places))
}

/// Shortest display of a user-entered value ("100", "2.5"; -0 shows as "0").
pub fn format_plain(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_leading_float("42"), Ok(42.0));
        assert_eq!(parse_leading_float("-3.5"), Ok(-3.5));
        assert_eq!(parse_leading_float("+7"), Ok(7.0));
        assert_eq!(parse_leading_float("1.5e3"), Ok(1500.0));
        assert_eq!(parse_leading_float("2E-2"), Ok(0.02));
    }

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parse_leading_float(".5"), Ok(0.5));
        assert_eq!(parse_leading_float("-.5"), Ok(-0.5));
        assert_eq!(parse_leading_float("5."), Ok(5.0));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_leading_float("12abc"), Ok(12.0));
        assert_eq!(parse_leading_float("  3.5e2 meters"), Ok(350.0));
        assert_eq!(parse_leading_float("1e"), Ok(1.0));
        assert_eq!(parse_leading_float("1e+"), Ok(1.0));
        assert_eq!(parse_leading_float("0x10"), Ok(0.0));
        assert_eq!(parse_leading_float("1.2.3"), Ok(1.2));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(parse_leading_float(""), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_leading_float("   "), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_leading_float("abc"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_leading_float("."), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_leading_float("-"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_leading_float("infinity"), Err(NumberError::ParseError(_))));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(parse_finite("Infinity"), Err(NumberError::NonFinite(f64::INFINITY)));
        assert!(matches!(parse_finite("1e999"), Err(NumberError::NonFinite(_))));
        assert_eq!(parse_finite("8"), Ok(8.0));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(1.03125, 4), 1.0313);
        assert_eq!(round_half_away(-1.03125, 4), -1.0313);
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(3.280839895013123, 4), 3.2808);
    }

    #[test]
    fn test_round_edge_values() {
        assert_eq!(round_half_away(f64::MAX, 4), f64::MAX);
        assert!(round_half_away(f64::NAN, 4).is_nan());
        let tiny = round_half_away(-0.00001, 4);
        assert_eq!(tiny, 0.0);
        assert!(tiny.is_sign_positive());
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(212.0, DECIMAL_PLACES), "212.0000");
        assert_eq!(to_fixed(273.15, DECIMAL_PLACES), "273.1500");
        assert_eq!(to_fixed(1.03125, DECIMAL_PLACES), "1.0313");
        assert_eq!(to_fixed(-1.03125, DECIMAL_PLACES), "-1.0313");
        assert_eq!(to_fixed(-0.00001, DECIMAL_PLACES), "0.0000");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(100.0), "100");
        assert_eq!(format_plain(2.5), "2.5");
        assert_eq!(format_plain(-0.0), "0");
        assert_eq!(format_plain(-12.25), "-12.25");
    }
}
