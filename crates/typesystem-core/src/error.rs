//! Error types for value conversions.
//!
//! Every failure a converter can report is a value conversion error. The
//! variants only differ in how much they can say about the offending value.
//! Nothing is caught or defaulted here; callers attach field context.

use thiserror::Error;

use crate::kinds::PropertyKind;

/// Errors that can occur while converting a property value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value's shape cannot be coerced to the requested kind.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: PropertyKind,
        actual: String,
    },

    /// A string could not be parsed as a number of the requested kind.
    #[error("Invalid {kind} value: {value:?}")]
    InvalidNumber { kind: PropertyKind, value: String },

    /// The number does not fit the requested kind.
    #[error("Numeric overflow converting {value} to {target}")]
    NumericOverflow { value: String, target: PropertyKind },

    /// NaN and infinite floats have no wire representation.
    #[error("Non-finite float {0} cannot be represented on the wire")]
    NonFiniteFloat(f64),

    /// An epoch value is outside the range of representable timestamps.
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    /// A value was present where only null is allowed.
    ///
    /// `actual` holds the offending value's compact text form.
    #[error("Expected null, got {actual}")]
    NotNull { actual: String },
}

impl ConversionError {
    /// Build a type mismatch error for the given target kind.
    pub fn mismatch(expected: PropertyKind, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// The kind the failed conversion was targeting, when known.
    pub fn target_kind(&self) -> Option<PropertyKind> {
        match self {
            Self::TypeMismatch { expected, .. } => Some(*expected),
            Self::InvalidNumber { kind, .. } => Some(*kind),
            Self::NumericOverflow { target, .. } => Some(*target),
            Self::NonFiniteFloat(_) => Some(PropertyKind::Float),
            Self::InvalidTimestamp { .. } => Some(PropertyKind::DateTime),
            Self::NotNull { .. } => Some(PropertyKind::Null),
        }
    }
}

/// Result type for value conversions.
pub type Result<T> = std::result::Result<T, ConversionError>;
