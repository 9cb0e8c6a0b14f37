use safe_numbers::NumericValue;
use serde::Serialize;

/// Value produced by a type parser for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Null,
    Number(f64),
    Text(String),
    Array(Vec<ParsedValue>),
}

impl ParsedValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParsedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParsedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ParsedValue]> {
        match self {
            ParsedValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<NumericValue> for ParsedValue {
    fn from(value: NumericValue) -> Self {
        match value {
            NumericValue::Number(n) => ParsedValue::Number(n),
            NumericValue::Text(s) => ParsedValue::Text(s),
        }
    }
}
