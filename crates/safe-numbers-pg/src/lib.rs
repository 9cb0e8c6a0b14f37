//! PostgreSQL type parser glue for [`safe_numbers`].
//!
//! Drivers keep a table of per-OID parsers that turn wire text into values.
//! This crate installs the safe decoders into such a table for `int8`,
//! `numeric` and their array types, and reverts them again in last-in,
//! first-out order.
//!
//! The table is abstracted as [`TypeParserRegistry`]; [`TypeParsers`] is an
//! in-memory implementation that drivers can embed or tests can use directly.
//!
//! # Example
//!
//! ```
//! use safe_numbers::UnsafePolicy;
//! use safe_numbers_pg::{oid, Format, InstallOptions, ParsedValue, SafeTypeParsers, TypeParsers};
//!
//! let mut registry = TypeParsers::new();
//! let mut installer = SafeTypeParsers::new();
//!
//! installer.install(&mut registry, InstallOptions::new().with_policy(UnsafePolicy::Text));
//! assert_eq!(
//!     registry.parse(oid::INT8, Format::Text, "1").unwrap(),
//!     ParsedValue::Number(1.0)
//! );
//! assert_eq!(
//!     registry.parse(oid::INT8, Format::Text, "9007199254740993").unwrap(),
//!     ParsedValue::Text("9007199254740993".into())
//! );
//!
//! installer.uninstall(&mut registry).unwrap();
//! assert!(registry.is_empty());
//! ```

mod array;
mod error;
mod install;
mod registry;
mod types;
mod value;

pub use array::parse_array;
pub use error::{ArrayError, InstallError, ParseError};
pub use install::{InstallConfig, InstallOptions, PreviousParser, SafeTypeParsers, SharedHandler};
pub use registry::{TypeParser, TypeParserRegistry, TypeParsers};
pub use types::{oid, Format, Oid};
pub use value::ParsedValue;
