use thiserror::Error;

use crate::NumberKind;

/// Error returned by the safe decoders.
///
/// The decoders themselves never fail; every error comes out of an
/// [`UnsafeHandler`](crate::UnsafeHandler) and is propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SafeNumberError {
    /// Raised by the default handlers. `parsed` is the lossy value the host
    /// parser produced for `text`.
    #[error("unsafe {kind} parse {text:?} to {parsed}")]
    Unsafe {
        kind: NumberKind,
        text: String,
        parsed: f64,
    },
    /// Failure reported by a caller-supplied handler.
    #[error("unsafe value handler failed: {0}")]
    Handler(String),
}

impl SafeNumberError {
    pub fn unsafe_parse(kind: NumberKind, parsed: f64, text: &str) -> Self {
        SafeNumberError::Unsafe {
            kind,
            text: text.to_owned(),
            parsed,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("unknown unsafe value policy `{0}`")]
    Unknown(String),
}
