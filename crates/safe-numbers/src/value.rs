//! Values produced by the safe decoders.

use std::fmt;

use serde::Serialize;

/// Which decoder judged a value unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int,
    Float,
}

impl NumberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Int => "int",
            NumberKind::Float => "float",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a safe decode.
///
/// Safe decodes always produce [`NumericValue::Number`]. An unsafe handler may
/// substitute anything it likes, most commonly the untouched wire text.
///
/// Serializes untagged, so a `Number` becomes a JSON number and a `Text` a
/// JSON string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(n) => Some(*n),
            NumericValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NumericValue::Number(_) => None,
            NumericValue::Text(s) => Some(s),
        }
    }

    /// `PartialEq` never matches NaN, so tests and callers check it here.
    pub fn is_nan(&self) -> bool {
        matches!(self, NumericValue::Number(n) if n.is_nan())
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        NumericValue::Text(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_owned())
    }
}
