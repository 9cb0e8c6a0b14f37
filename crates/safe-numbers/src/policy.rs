//! Named unsafe-value policies for configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    AcceptParsed, NumberKind, NumericValue, PolicyError, PreserveText, Raise, SafeNumberError,
    UnsafeHandler,
};

/// The built-in handlers by name.
///
/// ```
/// use safe_numbers::UnsafePolicy;
///
/// assert_eq!("text".parse::<UnsafePolicy>().unwrap(), UnsafePolicy::Text);
/// assert_eq!("pass_through".parse::<UnsafePolicy>().unwrap(), UnsafePolicy::Parsed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsafePolicy {
    /// [`Raise`]
    #[default]
    #[serde(alias = "throw")]
    Raise,
    /// [`PreserveText`]
    #[serde(alias = "preserve_text")]
    Text,
    /// [`AcceptParsed`]
    #[serde(alias = "pass_through")]
    Parsed,
}

impl UnsafePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            UnsafePolicy::Raise => "raise",
            UnsafePolicy::Text => "text",
            UnsafePolicy::Parsed => "parsed",
        }
    }

    /// Binds the policy to a decoder kind so `Raise` reports the right error.
    pub fn handler(self, kind: NumberKind) -> PolicyHandler {
        PolicyHandler { policy: self, kind }
    }
}

impl fmt::Display for UnsafePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnsafePolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" | "throw" => Ok(UnsafePolicy::Raise),
            "text" | "preserve_text" => Ok(UnsafePolicy::Text),
            "parsed" | "pass_through" => Ok(UnsafePolicy::Parsed),
            _ => Err(PolicyError::Unknown(s.to_owned())),
        }
    }
}

/// An [`UnsafePolicy`] bound to the [`NumberKind`] it reports errors for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyHandler {
    pub policy: UnsafePolicy,
    pub kind: NumberKind,
}

impl UnsafeHandler for PolicyHandler {
    fn handle(&self, parsed: f64, text: &str) -> Result<NumericValue, SafeNumberError> {
        match self.policy {
            UnsafePolicy::Raise => Raise(self.kind).handle(parsed, text),
            UnsafePolicy::Text => PreserveText.handle(parsed, text),
            UnsafePolicy::Parsed => AcceptParsed.handle(parsed, text),
        }
    }
}
