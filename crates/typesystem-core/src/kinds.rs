//! Property kinds understood by every type system.
//!
//! A `PropertyKind` is the declared kind of a property on a node or edge.
//! The mapping layer uses it to pick which converter method runs for a value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared kind of a graph property.
///
/// # YAML Format
///
/// Kinds are written as lowercase strings:
/// ```yaml
/// kind: string
/// kind: long
/// kind: datetime
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Text value
    String,

    /// 32-bit signed integer
    Integer,

    /// 64-bit signed integer, the extended-range integer kind
    Long,

    /// 64-bit floating point
    Float,

    /// Ordered sequence of values
    List,

    /// String-keyed mapping of values
    Dictionary,

    /// UTC timestamp, carried on the wire as an epoch number
    DateTime,

    /// Explicit null
    Null,
}

impl PropertyKind {
    /// All kinds, in declaration order.
    pub const ALL: [PropertyKind; 8] = [
        Self::String,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::List,
        Self::Dictionary,
        Self::DateTime,
        Self::Null,
    ];

    /// Lowercase name used in schemas and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::List => "list",
            Self::Dictionary => "dictionary",
            Self::DateTime => "datetime",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for PropertyKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
