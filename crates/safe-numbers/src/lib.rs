//! Decode database integer and decimal text into `f64` without silent
//! precision loss.
//!
//! Databases hand out 64-bit integers and arbitrary-precision decimals as text.
//! An `f64` represents integers exactly only up to 2^53 - 1 and most decimal
//! fractions not at all. The decoders here return the native value when it is
//! trustworthy and otherwise hand the lossy value and the original text to an
//! [`UnsafeHandler`], which decides what the caller gets.
//!
//! # Overview
//!
//! - [`safe_parse_int`] / [`safe_parse_int_with`] - integer text, checked
//!   against [`MAX_SAFE_INTEGER`]
//! - [`safe_parse_float`] / [`safe_parse_float_with`] - decimal text, checked
//!   by re-rendering at the text's digit count ([`float_compare`])
//! - [`Raise`], [`PreserveText`], [`AcceptParsed`] and closures - handlers
//! - [`UnsafePolicy`] - handlers by name, for configuration files
//!
//! # Example
//!
//! ```
//! use safe_numbers::{safe_parse_float, safe_parse_int, safe_parse_int_with};
//! use safe_numbers::{NumericValue, PreserveText};
//!
//! assert_eq!(safe_parse_int("42").unwrap(), NumericValue::Number(42.0));
//! assert!(safe_parse_int("9007199254740992").is_err());
//! assert_eq!(
//!     safe_parse_int_with("9007199254740993", &PreserveText).unwrap(),
//!     NumericValue::Text("9007199254740993".into())
//! );
//!
//! assert_eq!(safe_parse_float("0.100").unwrap(), NumericValue::Number(0.1));
//! assert!(safe_parse_float("0.000000000001").is_err());
//! ```

mod error;
mod float;
mod handler;
mod int;
pub mod number;
mod policy;
mod value;

pub use error::{PolicyError, SafeNumberError};
pub use float::{float_compare, float_trim, safe_parse_float, safe_parse_float_with};
pub use handler::{
    AcceptParsed, PreserveText, Raise, UnsafeHandler, DEFAULT_UNSAFE_FLOAT, DEFAULT_UNSAFE_INT,
};
pub use int::{is_safe_integer, safe_parse_int, safe_parse_int_with, MAX_SAFE_INTEGER};
pub use policy::{PolicyHandler, UnsafePolicy};
pub use value::{NumberKind, NumericValue};
