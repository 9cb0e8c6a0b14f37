//! Host number text semantics.
//!
//! The decoders judge safety against the number model of an ECMAScript host:
//! leading-token `parseInt`/`parseFloat` and `Number.prototype.toPrecision`.
//! These are native reimplementations of exactly that behavior.

mod parse;
mod precision;

pub use parse::{is_host_whitespace, parse_float, parse_int};
pub use precision::to_precision;
