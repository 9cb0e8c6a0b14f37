//! Fallback policies for values that cannot be decoded without loss.

use crate::{NumberKind, NumericValue, SafeNumberError};

/// Called with the lossy parsed value and the original wire text whenever a
/// decoder judges a value unsafe. Whatever it returns is returned by the
/// decoder unchanged.
///
/// Implemented for every `Fn(f64, &str) -> Result<NumericValue, SafeNumberError>`
/// closure, so ad-hoc policies (for example arbitrary-precision decoding) need
/// no wrapper type.
pub trait UnsafeHandler {
    fn handle(&self, parsed: f64, text: &str) -> Result<NumericValue, SafeNumberError>;
}

impl<F> UnsafeHandler for F
where
    F: Fn(f64, &str) -> Result<NumericValue, SafeNumberError>,
{
    fn handle(&self, parsed: f64, text: &str) -> Result<NumericValue, SafeNumberError> {
        self(parsed, text)
    }
}

/// Fails with [`SafeNumberError::Unsafe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raise(pub NumberKind);

/// Default handler of [`safe_parse_int`](crate::safe_parse_int).
pub const DEFAULT_UNSAFE_INT: Raise = Raise(NumberKind::Int);

/// Default handler of [`safe_parse_float`](crate::safe_parse_float).
pub const DEFAULT_UNSAFE_FLOAT: Raise = Raise(NumberKind::Float);

impl UnsafeHandler for Raise {
    fn handle(&self, parsed: f64, text: &str) -> Result<NumericValue, SafeNumberError> {
        Err(SafeNumberError::unsafe_parse(self.0, parsed, text))
    }
}

/// Returns the wire text untouched. Lossless, but the value becomes a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreserveText;

impl UnsafeHandler for PreserveText {
    fn handle(&self, _parsed: f64, text: &str) -> Result<NumericValue, SafeNumberError> {
        Ok(NumericValue::Text(text.to_owned()))
    }
}

/// Returns the lossy parsed value, accepting the loss silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptParsed;

impl UnsafeHandler for AcceptParsed {
    fn handle(&self, parsed: f64, _text: &str) -> Result<NumericValue, SafeNumberError> {
        Ok(NumericValue::Number(parsed))
    }
}
