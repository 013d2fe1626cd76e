//! Score normalization for dictionary weights.

use crate::error::{Result, ScoreError};

/// Maximum significant digits retained in a normalized score.
const SIGNIFICANT_DIGITS: usize = 4;

/// Normalize a decimal numeral to its canonical short form.
///
/// Zero-valued numerals (including `"-0"` and `"0.0"`) collapse to `"0"`.
/// Everything else is rendered with at most four significant digits, with
/// fixed or scientific notation selected the way `printf %g` does. The
/// rendering is deterministic for identical inputs.
pub fn normalize(raw: &str) -> Result<String, ScoreError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| ScoreError::Unparsable(raw.to_string()))?;

    if !value.is_finite() {
        return Err(ScoreError::NonFinite(raw.to_string()));
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format_general(value))
}

/// Render a non-zero finite value with [`SIGNIFICANT_DIGITS`] significant
/// digits: fixed notation while the decimal exponent stays in `[-4, 4)`,
/// scientific notation outside that range.
fn format_general(value: f64) -> String {
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);

    // `{:e}` on a finite f64 always yields `<mantissa>e<exponent>`.
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strip trailing zeros, and then a trailing point, from a rendering that
/// carries a fractional part.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_zero_valued_numerals() {
        assert_eq!(normalize("0").unwrap(), "0");
        assert_eq!(normalize("0.0").unwrap(), "0");
        assert_eq!(normalize("-0").unwrap(), "0");
        assert_eq!(normalize("0.000e10").unwrap(), "0");
    }

    #[test]
    fn rounds_to_four_significant_digits() {
        assert_eq!(normalize("3.14159").unwrap(), "3.142");
        assert_eq!(normalize("-3.14159").unwrap(), "-3.142");
        assert_eq!(normalize("99.999").unwrap(), "100");
    }

    #[test]
    fn keeps_short_numerals_short() {
        assert_eq!(normalize("5").unwrap(), "5");
        assert_eq!(normalize("-4.5").unwrap(), "-4.5");
        assert_eq!(normalize("-99.99").unwrap(), "-99.99");
    }

    #[test]
    fn uses_fixed_notation_down_to_exponent_minus_four() {
        assert_eq!(normalize("0.0001234567").unwrap(), "0.0001235");
        assert_eq!(normalize("0.001").unwrap(), "0.001");
    }

    #[test]
    fn switches_to_scientific_for_large_magnitudes() {
        assert_eq!(normalize("12345678").unwrap(), "1.235e+07");
        assert_eq!(normalize("100000").unwrap(), "1e+05");
    }

    #[test]
    fn switches_to_scientific_for_small_magnitudes() {
        assert_eq!(normalize("0.00001234").unwrap(), "1.234e-05");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(normalize("-6.78901").unwrap(), normalize("-6.78901").unwrap());
    }

    #[test]
    fn rejects_unparsable_numerals() {
        assert!(matches!(normalize("abc"), Err(ScoreError::Unparsable(_))));
        assert!(matches!(normalize(""), Err(ScoreError::Unparsable(_))));
        assert!(matches!(normalize("1.2.3"), Err(ScoreError::Unparsable(_))));
    }

    #[test]
    fn rejects_non_finite_numerals() {
        assert!(matches!(normalize("inf"), Err(ScoreError::NonFinite(_))));
        assert!(matches!(normalize("-inf"), Err(ScoreError::NonFinite(_))));
        assert!(matches!(normalize("NaN"), Err(ScoreError::NonFinite(_))));
    }
}
