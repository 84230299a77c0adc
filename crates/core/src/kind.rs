//! Runtime type names for unknown values.

use std::fmt;

use serde_json::Value;

/// The runtime type observed for an unknown value.
///
/// Names follow JavaScript `typeof`: `null`, arrays and objects all report
/// `object`, and a missing value reports `undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
}

impl Kind {
    /// Inspect a possibly-absent value.
    ///
    /// Accepts both `&Value` and `Option<&Value>`, so the result of
    /// `Map::get` can be passed straight in.
    #[must_use]
    pub fn of<'a>(value: impl Into<Option<&'a Value>>) -> Self {
        match value.into() {
            None => Self::Undefined,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Null | Value::Array(_) | Value::Object(_)) => Self::Object,
        }
    }

    /// Get the `typeof` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
