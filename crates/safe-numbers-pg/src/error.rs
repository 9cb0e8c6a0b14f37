use safe_numbers::SafeNumberError;
use thiserror::Error;

/// Malformed PostgreSQL array literal. Offsets are byte positions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("expected `{{` at byte {0}")]
    ExpectedOpenBrace(usize),
    #[error("array dimensions are not followed by `=`")]
    MissingDimensionsAssignment,
    #[error("malformed array dimensions at byte {0}")]
    InvalidDimensions(usize),
    #[error("array nested deeper than 6 dimensions at byte {0}")]
    TooDeep(usize),
    #[error("unterminated quoted element starting at byte {0}")]
    UnterminatedQuote(usize),
    #[error("empty element at byte {0}")]
    EmptyElement(usize),
    #[error("unexpected character at byte {0}")]
    UnexpectedCharacter(usize),
    #[error("unexpected end of array literal")]
    UnexpectedEnd,
}

/// Error returned by an installed type parser.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Numeric(#[from] SafeNumberError),
    #[error("malformed array literal: {0}")]
    Array(#[from] ArrayError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("no safe type parsers are installed")]
    NothingInstalled,
}
