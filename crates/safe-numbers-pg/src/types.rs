//! PostgreSQL wire type identifiers.

/// PostgreSQL type OID.
pub type Oid = u32;

/// OIDs of the types the safe parsers take over.
pub mod oid {
    use super::Oid;

    /// `bigint` / `int8`
    pub const INT8: Oid = 20;
    /// `numeric` / `decimal`
    pub const NUMERIC: Oid = 1700;
    /// `bigint[]`
    pub const INT8_ARRAY: Oid = 1016;
    /// `numeric[]`
    pub const NUMERIC_ARRAY: Oid = 1231;
}

/// Wire format a parser is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Binary,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Binary => "binary",
        }
    }
}
