//! Conversion error types.
//!
//! Messages are part of the public contract: consumers match on the text,
//! so the `Error <function> typeof value is <kind>` layout must not change.

use thiserror::Error;

use crate::kind::Kind;

/// Error returned when an unknown value does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A shape conversion (`unknownToString`, `unknownToObject`, ...) failed.
    #[error("Error {function} typeof value is {kind}")]
    ShapeMismatch { function: &'static str, kind: Kind },

    /// A guard-parameterized conversion failed; `guards` names the guards.
    #[error("Error {function} typeof value is {kind}, {guards}")]
    GuardMismatch {
        function: &'static str,
        kind: Kind,
        guards: String,
    },
}

impl ConversionError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(function: &'static str, kind: Kind) -> Self {
        Self::ShapeMismatch { function, kind }
    }

    /// Create a guard mismatch error.
    pub fn guard_mismatch(function: &'static str, kind: Kind, guards: impl Into<String>) -> Self {
        Self::GuardMismatch {
            function,
            kind,
            guards: guards.into(),
        }
    }

    /// The name of the conversion that failed.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { function, .. } | Self::GuardMismatch { function, .. } => *function,
        }
    }

    /// The runtime type that was observed.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::ShapeMismatch { kind, .. } | Self::GuardMismatch { kind, .. } => *kind,
        }
    }

    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            Self::GuardMismatch { .. } => "GUARD_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let error = ConversionError::shape_mismatch("unknownToString", Kind::Number);
        assert_eq!(
            error.to_string(),
            "Error unknownToString typeof value is number"
        );
        assert_eq!(error.code(), "SHAPE_MISMATCH");
    }

    #[test]
    fn test_guard_mismatch_message() {
        let error = ConversionError::guard_mismatch(
            "unknownArrayToArrayType",
            Kind::Object,
            "valueF=function",
        );
        assert_eq!(
            error.to_string(),
            "Error unknownArrayToArrayType typeof value is object, valueF=function"
        );
        assert_eq!(error.function(), "unknownArrayToArrayType");
        assert_eq!(error.kind(), Kind::Object);
    }
}
