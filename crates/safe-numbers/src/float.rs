//! Decimal decoding guarded by round-trip precision verification.

use crate::number::{is_host_whitespace, parse_float, to_precision};
use crate::{NumberKind, NumericValue, SafeNumberError, UnsafeHandler, DEFAULT_UNSAFE_FLOAT};

/// Right-trims zeros and whitespace from decimal text containing a `.`.
///
/// Text without a decimal point is returned as-is, so `"100"` keeps its
/// zeros while `"0.100"` becomes `"0.1"` and `"0.000"` becomes `"0."`.
pub fn float_trim(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches(|c: char| c == '0' || is_host_whitespace(c))
    } else {
        text
    }
}

/// Checks that `parsed`, rendered with as many significant digits as `text`
/// has digit characters, reads back as `text` (modulo trailing zeros).
///
/// Every ASCII digit in `text` counts towards the precision, including leading
/// zeros and exponent digits.
pub fn float_compare(parsed: f64, text: &str) -> bool {
    let precision = text.bytes().filter(u8::is_ascii_digit).count();
    float_trim(&to_precision(parsed, precision)) == float_trim(text)
}

/// Decodes decimal text, raising when the `f64` loses precision.
///
/// See [`safe_parse_float_with`].
pub fn safe_parse_float(text: &str) -> Result<NumericValue, SafeNumberError> {
    safe_parse_float_with(text, &DEFAULT_UNSAFE_FLOAT)
}

/// Decodes decimal text, delegating values that fail round-trip verification
/// to `handler`.
///
/// NaN and infinities are always returned directly. The check runs on the
/// parsed value, so loss that happens to re-render as the same digits (for
/// example `"9007199254740994"`, which is exactly representable) passes.
pub fn safe_parse_float_with<H>(text: &str, handler: &H) -> Result<NumericValue, SafeNumberError>
where
    H: UnsafeHandler + ?Sized,
{
    let parsed = parse_float(text);
    if !parsed.is_finite() || float_compare(parsed, text) {
        return Ok(NumericValue::Number(parsed));
    }
    tracing::debug!(kind = %NumberKind::Float, text, parsed, "delegating unsafe decode");
    handler.handle(parsed, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim() {
        assert_eq!(float_trim("0.100"), "0.1");
        assert_eq!(float_trim("0.000"), "0.");
        assert_eq!(float_trim("100"), "100");
        assert_eq!(float_trim("1.50 \u{A0}\u{FEFF}"), "1.5");
        assert_eq!(float_trim("1.000000000000e-12"), "1.000000000000e-12");
        assert_eq!(float_trim(""), "");
    }

    #[test]
    fn compare() {
        assert!(float_compare(1234.5, "1234.5"));
        assert!(float_compare(0.1, "0.100"));
        assert!(float_compare(0.0, "0.000"));
        assert!(float_compare(3.45, "3.45"));
        assert!(float_compare(100.0, "100"));
        assert!(!float_compare(1e-12, "0.000000000001"));
        assert!(!float_compare(9007199254740992.0, "9007199254740993"));
    }

    #[test]
    fn compare_is_textual() {
        // Signs and padding the renderer never produces do not compare equal.
        assert!(!float_compare(5.0, "+5"));
        assert!(!float_compare(-0.0, "-0"));
        assert!(!float_compare(5.0, " 5"));
    }
}
