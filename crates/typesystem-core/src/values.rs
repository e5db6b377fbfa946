//! Application-side property values.
//!
//! `PropertyValue` is the value a mapped node or edge property holds inside
//! the application. Type systems convert it to and from their wire form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::kinds::PropertyKind;

/// Application-native property value.
///
/// `Null` is the application's null-equivalent. `Integer` and `Long` are kept
/// apart so a property declared as a 32-bit integer never silently widens.
///
/// Equality is numeric across the two integer variants: `Integer(7)` equals
/// `Long(7)`, including inside lists and dictionaries. All other variants
/// compare structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Integer(i32),

    /// 64-bit signed integer
    Long(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Ordered sequence of values
    List(Vec<PropertyValue>),

    /// String-keyed mapping of values
    Dictionary(HashMap<String, PropertyValue>),

    /// UTC timestamp
    ///
    /// Untagged deserialization never produces this variant since strings are
    /// matched first; timestamps enter through a type system's `to_datetime`.
    DateTime(DateTime<Utc>),
}

impl PropertyValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a list value.
    pub fn list(values: impl IntoIterator<Item = PropertyValue>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// Create a dictionary value.
    pub fn dictionary<K>(entries: impl IntoIterator<Item = (K, PropertyValue)>) -> Self
    where
        K: Into<String>,
    {
        Self::Dictionary(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The kind this value naturally belongs to.
    ///
    /// Booleans have no kind of their own and report `None`.
    pub fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Null => Some(PropertyKind::Null),
            Self::Bool(_) => None,
            Self::Integer(_) => Some(PropertyKind::Integer),
            Self::Long(_) => Some(PropertyKind::Long),
            Self::Float(_) => Some(PropertyKind::Float),
            Self::String(_) => Some(PropertyKind::String),
            Self::List(_) => Some(PropertyKind::List),
            Self::Dictionary(_) => Some(PropertyKind::Dictionary),
            Self::DateTime(_) => Some(PropertyKind::DateTime),
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Dictionary(_) => "dictionary",
            Self::DateTime(_) => "datetime",
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Long(i) => i32::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(i) => Some(*i),
            Self::Integer(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Try to get this value as a dictionary.
    pub fn as_dictionary(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            Self::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Integer(a), Self::Long(b)) | (Self::Long(b), Self::Integer(a)) => {
                i64::from(*a) == *b
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dictionary(a), Self::Dictionary(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

/// Text rendering used when a value is stored as a string property.
///
/// Strings render verbatim, numbers and booleans in their JSON spelling,
/// timestamps as RFC 3339, and containers as compact JSON.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Long(i) => write!(f, "{i}"),
            Self::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{x}"),
            },
            Self::String(s) => f.write_str(s),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::List(_) | Self::Dictionary(_) => {
                let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
