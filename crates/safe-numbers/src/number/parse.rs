//! Leading-token number parsing.
//!
//! Both parsers skip leading whitespace, consume the longest prefix that forms
//! a number and ignore everything after it. Input without such a prefix is NaN,
//! never an error.

/// Whitespace skipped before a number token (`StrWhiteSpaceChar`).
///
/// Unicode `White_Space` minus U+0085, plus the byte order mark U+FEFF.
pub fn is_host_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Parses a base-10 integer prefix of `text`.
///
/// Digits are converted to the nearest `f64`, so magnitudes above 2^53 may
/// already be rounded here.
///
/// Examples:
/// - `"  42" -> 42`
/// - `"12abc" -> 12`
/// - `"1e5" -> 1`
/// - `"-" -> NaN`
pub fn parse_int(text: &str) -> f64 {
    let rest = text.trim_start_matches(is_host_whitespace);
    let (negative, rest) = split_sign(rest);
    let digits = &rest[..count_digits(rest.as_bytes())];
    if digits.is_empty() {
        return f64::NAN;
    }
    let magnitude = digits.parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parses a decimal floating point prefix of `text`.
///
/// Accepts `[+-]? (Infinity | digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// An exponent marker without digits is left unconsumed, so `"1e"` is `1`.
pub fn parse_float(text: &str) -> f64 {
    let rest = text.trim_start_matches(is_host_whitespace);
    let (negative, unsigned) = split_sign(rest);
    if unsigned.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let token = &rest[..float_prefix_len(rest)];
    if token.is_empty() {
        return f64::NAN;
    }
    token.parse::<f64>().unwrap_or(f64::NAN)
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Byte length of the finite decimal literal at the start of `text`, or 0.
fn float_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut has_digits = int_digits > 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if has_digits || frac_digits > 0 {
            end += 1 + frac_digits;
            has_digits = true;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}
