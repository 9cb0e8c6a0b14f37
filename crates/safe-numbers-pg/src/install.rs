//! Installing and reverting the safe numeric parsers.
//!
//! Every [`SafeTypeParsers::install`] saves the parsers it replaces as one
//! frame on a stack; [`SafeTypeParsers::uninstall`] pops the newest frame and
//! puts those parsers back. Nested installs therefore unwind in reverse order.

use std::fmt;
use std::sync::Arc;

use safe_numbers::{
    safe_parse_float_with, safe_parse_int_with, NumberKind, UnsafeHandler, UnsafePolicy,
    DEFAULT_UNSAFE_FLOAT, DEFAULT_UNSAFE_INT,
};
use serde::{Deserialize, Serialize};

use crate::{
    oid, parse_array, Format, InstallError, Oid, ParseError, ParsedValue, TypeParser,
    TypeParserRegistry,
};

/// Shared, thread-safe unsafe value handler.
pub type SharedHandler = Arc<dyn UnsafeHandler + Send + Sync>;

/// Handlers and switches for one installation.
#[derive(Clone)]
pub struct InstallOptions {
    unsafe_int: SharedHandler,
    unsafe_float: SharedHandler,
    arrays: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            unsafe_int: Arc::new(DEFAULT_UNSAFE_INT),
            unsafe_float: Arc::new(DEFAULT_UNSAFE_FLOAT),
            arrays: true,
        }
    }
}

impl InstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unsafe_int<H>(mut self, handler: H) -> Self
    where
        H: UnsafeHandler + Send + Sync + 'static,
    {
        self.unsafe_int = Arc::new(handler);
        self
    }

    pub fn with_unsafe_float<H>(mut self, handler: H) -> Self
    where
        H: UnsafeHandler + Send + Sync + 'static,
    {
        self.unsafe_float = Arc::new(handler);
        self
    }

    /// Uses `policy` for both integers and decimals.
    pub fn with_policy(self, policy: UnsafePolicy) -> Self {
        self.with_unsafe_int(policy.handler(NumberKind::Int))
            .with_unsafe_float(policy.handler(NumberKind::Float))
    }

    /// Whether `int8[]` and `numeric[]` are taken over as well. On by default.
    pub fn with_arrays(mut self, arrays: bool) -> Self {
        self.arrays = arrays;
        self
    }
}

impl fmt::Debug for InstallOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallOptions")
            .field("arrays", &self.arrays)
            .finish_non_exhaustive()
    }
}

/// Serializable form of [`InstallOptions`] for application config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub unsafe_int: UnsafePolicy,
    pub unsafe_float: UnsafePolicy,
    pub arrays: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            unsafe_int: UnsafePolicy::Raise,
            unsafe_float: UnsafePolicy::Raise,
            arrays: true,
        }
    }
}

impl From<InstallConfig> for InstallOptions {
    fn from(config: InstallConfig) -> Self {
        InstallOptions::new()
            .with_unsafe_int(config.unsafe_int.handler(NumberKind::Int))
            .with_unsafe_float(config.unsafe_float.handler(NumberKind::Float))
            .with_arrays(config.arrays)
    }
}

/// A registry entry as it was before an install.
#[derive(Clone)]
pub struct PreviousParser {
    pub oid: Oid,
    pub format: Format,
    pub parser: Option<TypeParser>,
}

impl fmt::Debug for PreviousParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviousParser")
            .field("oid", &self.oid)
            .field("format", &self.format)
            .field("overridden", &self.parser.is_some())
            .finish()
    }
}

/// Owner of the install stack for one registry.
#[derive(Debug, Default)]
pub struct SafeTypeParsers {
    stack: Vec<Vec<PreviousParser>>,
}

impl SafeTypeParsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of installs not yet reverted.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Replaces the `int8` and `numeric` text parsers (and their array
    /// variants unless disabled) with safe decoders. Returns the entries that
    /// were replaced.
    pub fn install<R>(&mut self, registry: &mut R, options: InstallOptions) -> Vec<PreviousParser>
    where
        R: TypeParserRegistry + ?Sized,
    {
        let InstallOptions {
            unsafe_int,
            unsafe_float,
            arrays,
        } = options;

        let int8 = int8_parser(unsafe_int);
        let numeric = numeric_parser(unsafe_float);

        let mut frame = Vec::with_capacity(4);
        replace(registry, &mut frame, oid::INT8, int8.clone());
        replace(registry, &mut frame, oid::NUMERIC, numeric.clone());
        if arrays {
            replace(registry, &mut frame, oid::INT8_ARRAY, array_parser(int8));
            replace(registry, &mut frame, oid::NUMERIC_ARRAY, array_parser(numeric));
        }

        self.stack.push(frame.clone());
        tracing::debug!(depth = self.stack.len(), arrays, "installed safe numeric type parsers");
        frame
    }

    /// Restores the parsers replaced by the most recent [`install`](Self::install).
    pub fn uninstall<R>(&mut self, registry: &mut R) -> Result<Vec<PreviousParser>, InstallError>
    where
        R: TypeParserRegistry + ?Sized,
    {
        let frame = self.stack.pop().ok_or(InstallError::NothingInstalled)?;
        for previous in frame.iter().rev() {
            registry.set_type_parser(previous.oid, previous.format, previous.parser.clone());
        }
        tracing::debug!(depth = self.stack.len(), "restored previous numeric type parsers");
        Ok(frame)
    }
}

fn replace<R>(registry: &mut R, frame: &mut Vec<PreviousParser>, oid: Oid, parser: TypeParser)
where
    R: TypeParserRegistry + ?Sized,
{
    frame.push(PreviousParser {
        oid,
        format: Format::Text,
        parser: registry.get_type_parser(oid, Format::Text),
    });
    registry.set_type_parser(oid, Format::Text, Some(parser));
}

fn int8_parser(handler: SharedHandler) -> TypeParser {
    Arc::new(move |text: &str| -> Result<ParsedValue, ParseError> {
        Ok(safe_parse_int_with(text, handler.as_ref())?.into())
    })
}

fn numeric_parser(handler: SharedHandler) -> TypeParser {
    Arc::new(move |text: &str| -> Result<ParsedValue, ParseError> {
        Ok(safe_parse_float_with(text, handler.as_ref())?.into())
    })
}

fn array_parser(element: TypeParser) -> TypeParser {
    Arc::new(move |text: &str| -> Result<ParsedValue, ParseError> {
        Ok(ParsedValue::Array(parse_array(text, |item| element(item))?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config: InstallConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InstallConfig::default());
        assert!(config.arrays);

        let config: InstallConfig =
            serde_json::from_str(r#"{"unsafe_int":"text","unsafe_float":"pass_through","arrays":false}"#)
                .unwrap();
        assert_eq!(config.unsafe_int, UnsafePolicy::Text);
        assert_eq!(config.unsafe_float, UnsafePolicy::Parsed);
        assert!(!config.arrays);
    }

    #[test]
    fn previous_parser_debug_hides_closure() {
        let previous = PreviousParser {
            oid: oid::INT8,
            format: Format::Text,
            parser: None,
        };
        assert_eq!(
            format!("{previous:?}"),
            "PreviousParser { oid: 20, format: Text, overridden: false }"
        );
    }
}
