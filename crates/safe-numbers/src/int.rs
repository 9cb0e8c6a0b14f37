//! Integer decoding guarded against magnitude overflow.

use crate::number::parse_int;
use crate::{NumberKind, NumericValue, SafeNumberError, UnsafeHandler, DEFAULT_UNSAFE_INT};

/// Largest integer `n` such that every integer in `0..=n` is exactly
/// representable as an `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Returns `true` for finite integral values with magnitude `<= 2^53 - 1`.
pub fn is_safe_integer(value: f64) -> bool {
    value.is_finite() && value.trunc() == value && value.abs() <= MAX_SAFE_INTEGER as f64
}

/// Decodes base-10 integer text, raising on values outside the safe range.
///
/// See [`safe_parse_int_with`].
pub fn safe_parse_int(text: &str) -> Result<NumericValue, SafeNumberError> {
    safe_parse_int_with(text, &DEFAULT_UNSAFE_INT)
}

/// Decodes base-10 integer text, delegating unsafe values to `handler`.
///
/// Text without a leading integer decodes to NaN without consulting the
/// handler. A magnitude above 2^53 - 1 goes to the handler together with the
/// already rounded parse result.
pub fn safe_parse_int_with<H>(text: &str, handler: &H) -> Result<NumericValue, SafeNumberError>
where
    H: UnsafeHandler + ?Sized,
{
    let parsed = parse_int(text);
    if parsed.is_nan() || is_safe_integer(parsed) {
        return Ok(NumericValue::Number(parsed));
    }
    tracing::debug!(kind = %NumberKind::Int, text, parsed, "delegating unsafe decode");
    handler.handle(parsed, text)
}
