//! Default text form of scalars
//!
//! Both the vector and the matrix renderings go through [`to_text`], so an
//! entry's width in a matrix grid always matches how it prints on its own.

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` print as plain decimals
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Default decimal text of a scalar.
///
/// Uses the shortest digits that round-trip, laid out like the JVM's
/// `Double.toString`:
/// - zero and magnitudes in `[1e-3, 1e7)` print as plain decimals with at
///   least one fractional digit (`1.0`, `2020.12`, `0.001`)
/// - everything else prints as `<mantissa>E<exponent>` with at least one
///   fractional digit in the mantissa (`1.0E7`, `1.23456789E8`, `1.0E-4`)
/// - non-finite values print as `NaN`, `Infinity`, `-Infinity`
pub fn to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // `{:?}` stays in plain notation across this whole range
        return format!("{:?}", value);
    }

    let shortest = format!("{:e}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => shortest,
    }
}

/// Character width of [`to_text`]
pub fn text_width(value: f64) -> usize {
    to_text(value).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_keeps_fraction() {
        assert_eq!(to_text(1.0), "1.0");
        assert_eq!(to_text(100.0), "100.0");
        assert_eq!(to_text(-2.0), "-2.0");
        assert_eq!(to_text(0.0), "0.0");
        assert_eq!(to_text(-0.0), "-0.0");
        assert_eq!(to_text(9999999.0), "9999999.0");
    }

    #[test]
    fn test_fractional_shortest() {
        assert_eq!(to_text(2020.12), "2020.12");
        assert_eq!(to_text(1.46), "1.46");
        assert_eq!(to_text(0.05), "0.05");
        assert_eq!(to_text(0.001), "0.001");
        assert_eq!(to_text(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(to_text(1e7), "1.0E7");
        assert_eq!(to_text(-1e7), "-1.0E7");
        assert_eq!(to_text(123456789.0), "1.23456789E8");
        assert_eq!(to_text(1e-4), "1.0E-4");
        assert_eq!(to_text(2.5e-10), "2.5E-10");
        assert_eq!(to_text(1e300), "1.0E300");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_text(f64::NAN), "NaN");
        assert_eq!(to_text(f64::INFINITY), "Infinity");
        assert_eq!(to_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(1.0), 3);
        assert_eq!(text_width(2020.12), 7);
        assert_eq!(text_width(-0.5), 4);
        assert_eq!(text_width(1e-4), 6);
        assert_eq!(text_width(f64::INFINITY), 8);
    }
}
