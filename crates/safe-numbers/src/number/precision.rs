//! Fixed significant-digit rendering (`Number.prototype.toPrecision`).

/// Significant digits in the exact decimal expansion of the widest `f64`.
///
/// Every finite double is a dyadic rational, so its decimal expansion is
/// finite; 767 digits cover the longest one (the largest subnormal).
const EXACT_DIGITS: usize = 767;

/// Renders `value` with exactly `precision` significant digits.
///
/// Rounding is performed on the exact binary value and ties go to the larger
/// digit string, so `to_precision(2.5, 1)` is `"3"`. Exponential notation is
/// used when the decimal exponent is below -6 or not below `precision`.
/// A `precision` of zero is treated as one.
///
/// Examples:
/// - `to_precision(0.1, 4) -> "0.1000"`
/// - `to_precision(1e-12, 13) -> "1.000000000000e-12"`
/// - `to_precision(123456.0, 2) -> "1.2e+5"`
pub fn to_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let rendered = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_string();
    }
    let precision = precision.max(1);

    let mut out = String::with_capacity(precision + 8);
    // -0 renders unsigned.
    if value < 0.0 {
        out.push('-');
    }
    let (digits, exponent) = if value == 0.0 {
        ("0".repeat(precision), 0)
    } else {
        round_significant(value.abs(), precision)
    };

    let p = precision as i64;
    if exponent < -6 || exponent >= p {
        out.push_str(&digits[..1]);
        if precision > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exponent >= 0 { '+' } else { '-' });
        out.push_str(&exponent.abs().to_string());
    } else if exponent == p - 1 {
        out.push_str(&digits);
    } else if exponent >= 0 {
        let split = (exponent + 1) as usize;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    } else {
        out.push_str("0.");
        for _ in 0..(-(exponent + 1)) {
            out.push('0');
        }
        out.push_str(&digits);
    }
    out
}

/// Rounds a positive finite `value` to `precision` significant digits.
///
/// Returns the digit string and the decimal exponent of its first digit.
fn round_significant(value: f64, precision: usize) -> (String, i64) {
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    if digits.len() > precision {
        // The expansion is exact, so a 5 here is either a tie or above half.
        let round_up = digits[precision] >= b'5';
        digits.truncate(precision);
        if round_up && carry(&mut digits) {
            digits.insert(0, b'1');
            digits.pop();
            exponent += 1;
        }
    } else {
        digits.resize(precision, b'0');
    }

    (digits.into_iter().map(char::from).collect(), exponent)
}

/// Adds one ulp to a decimal digit string. Returns `true` on overflow.
fn carry(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation() {
        assert_eq!(to_precision(1234.5, 5), "1234.5");
        assert_eq!(to_precision(3.45, 3), "3.45");
        assert_eq!(to_precision(0.1, 4), "0.1000");
        assert_eq!(to_precision(0.1, 1), "0.1");
        assert_eq!(to_precision(100.0, 3), "100");
        assert_eq!(to_precision(100.0, 5), "100.00");
        assert_eq!(to_precision(0.000123, 3), "0.000123");
        assert_eq!(to_precision(-1.5, 2), "-1.5");
    }

    #[test]
    fn exponential_notation() {
        assert_eq!(to_precision(1e-12, 13), "1.000000000000e-12");
        assert_eq!(to_precision(1e-7, 1), "1e-7");
        assert_eq!(to_precision(123456.0, 2), "1.2e+5");
        assert_eq!(to_precision(100.0, 2), "1.0e+2");
        assert_eq!(to_precision(1e21, 1), "1e+21");
        assert_eq!(to_precision(-1e-7, 2), "-1.0e-7");
    }

    #[test]
    fn zero() {
        assert_eq!(to_precision(0.0, 1), "0");
        assert_eq!(to_precision(0.0, 4), "0.000");
        assert_eq!(to_precision(-0.0, 2), "0.0");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(to_precision(2.5, 1), "3");
        assert_eq!(to_precision(0.5, 1), "0.5");
        assert_eq!(to_precision(1.25, 2), "1.3");
        assert_eq!(to_precision(-2.5, 1), "-3");
        // 1.005 is slightly below the tie in binary.
        assert_eq!(to_precision(1.005, 3), "1.00");
    }

    #[test]
    fn carry_bumps_exponent() {
        assert_eq!(to_precision(9.99, 2), "10");
        assert_eq!(to_precision(99.99, 3), "100");
        assert_eq!(to_precision(0.0000999, 1), "0.0001");
        assert_eq!(to_precision(999999.9, 6), "1.00000e+6");
    }

    #[test]
    fn large_integers() {
        assert_eq!(to_precision(9007199254740992.0, 16), "9007199254740992");
        assert_eq!(to_precision(9007199254740991.0, 16), "9007199254740991");
        assert_eq!(to_precision(9007199254740994.0, 16), "9007199254740994");
    }

    #[test]
    fn non_finite() {
        assert_eq!(to_precision(f64::NAN, 0), "NaN");
        assert_eq!(to_precision(f64::INFINITY, 0), "Infinity");
        assert_eq!(to_precision(f64::NEG_INFINITY, 3), "-Infinity");
    }

    #[test]
    fn subnormal_has_exact_digits() {
        let smallest = f64::from_bits(1);
        assert_eq!(to_precision(smallest, 2), "4.9e-324");
    }
}
