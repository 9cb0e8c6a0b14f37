//! Type parser dispatch tables.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{Format, Oid, ParseError, ParsedValue};

/// Decodes the wire text of one column value.
pub type TypeParser = Arc<dyn Fn(&str) -> Result<ParsedValue, ParseError> + Send + Sync>;

/// A driver's table of per-type parsers.
///
/// `None` stands for the driver's built-in behavior, so restoring a `None`
/// entry removes any override.
pub trait TypeParserRegistry {
    fn get_type_parser(&self, oid: Oid, format: Format) -> Option<TypeParser>;
    fn set_type_parser(&mut self, oid: Oid, format: Format, parser: Option<TypeParser>);
}

/// In-memory [`TypeParserRegistry`].
///
/// Types without a registered parser decode to their raw text, which is what
/// PostgreSQL drivers do for `int8` and `numeric` out of the box.
#[derive(Clone, Default)]
pub struct TypeParsers {
    parsers: HashMap<(Oid, Format), TypeParser>,
}

impl TypeParsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    pub fn contains(&self, oid: Oid, format: Format) -> bool {
        self.parsers.contains_key(&(oid, format))
    }

    /// Decodes `text` as a value of type `oid`.
    pub fn parse(&self, oid: Oid, format: Format, text: &str) -> Result<ParsedValue, ParseError> {
        match self.parsers.get(&(oid, format)) {
            Some(parser) => parser(text),
            None => Ok(ParsedValue::Text(text.to_owned())),
        }
    }
}

impl TypeParserRegistry for TypeParsers {
    fn get_type_parser(&self, oid: Oid, format: Format) -> Option<TypeParser> {
        self.parsers.get(&(oid, format)).cloned()
    }

    fn set_type_parser(&mut self, oid: Oid, format: Format, parser: Option<TypeParser>) {
        match parser {
            Some(parser) => {
                self.parsers.insert((oid, format), parser);
            }
            None => {
                self.parsers.remove(&(oid, format));
            }
        }
    }
}

impl fmt::Debug for TypeParsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.parsers.keys().collect();
        keys.sort_by_key(|(oid, format)| (*oid, format.as_str()));
        f.debug_struct("TypeParsers").field("parsers", &keys).finish()
    }
}
