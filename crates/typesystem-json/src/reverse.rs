//! Reverse conversion: JSON value → PropertyValue.
//!
//! Inbound conversion is strict. Each method accepts a fixed set of JSON
//! shapes and rejects the rest with a `ConversionError`:
//!
//! | method          | accepted JSON                                           |
//! |-----------------|---------------------------------------------------------|
//! | `to_string`     | anything; non-strings become their compact JSON text    |
//! | `to_integer`    | number (truncated), numeric string, bool; must fit i32  |
//! | `to_long`       | number (truncated), numeric string, bool; must fit i64  |
//! | `to_float`      | number, numeric string, bool                            |
//! | `to_list`       | array                                                   |
//! | `to_dictionary` | object, or array of `[key, value]` pairs                |
//! | `to_datetime`   | number (epoch, fractional allowed)                      |
//! | `to_null`       | null only                                               |
//!
//! Strings and objects are not sequences here: `to_list` takes arrays only,
//! unlike duck-typed mappers that iterate any iterable.

use serde_json::{Number, Value};
use std::collections::HashMap;
use std::num::IntErrorKind;
use tracing::debug;
use typesystem_core::{
    ConversionConfig, ConversionError, Converter, EpochCodec, PropertyKind, PropertyValue, Result,
    TimestampCodec,
};

/// Converts JSON values to application values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationConverter {
    codec: EpochCodec,
}

impl ApplicationConverter {
    /// Create a converter using the given configuration.
    pub const fn new(config: ConversionConfig) -> Self {
        Self {
            codec: config.codec(),
        }
    }

    fn epoch_to_datetime(&self, n: &Number) -> Result<PropertyValue> {
        let dt = match n.as_i64() {
            Some(epoch) => self.codec.to_datetime(epoch)?,
            None => self
                .codec
                .fractional_to_datetime(n.as_f64().unwrap_or(f64::NAN))?,
        };
        Ok(PropertyValue::DateTime(dt))
    }
}

/// Short name of a JSON value's type, used in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(kind: PropertyKind, value: &Value) -> ConversionError {
    debug!("Rejecting JSON {} for {} property", json_type_name(value), kind);
    ConversionError::mismatch(kind, json_type_name(value))
}

fn overflow(kind: PropertyKind, value: impl ToString) -> ConversionError {
    ConversionError::NumericOverflow {
        value: value.to_string(),
        target: kind,
    }
}

/// Parse a JSON value as a whole number for an integer-like kind.
///
/// Fractional numbers truncate toward zero; numeric strings are trimmed
/// before parsing and must not carry a fractional part.
fn integral(kind: PropertyKind, value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(overflow(kind, n));
            }
            let f = n.as_f64().unwrap_or(f64::NAN).trunc();
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Ok(f as i64)
            } else {
                Err(overflow(kind, n))
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => overflow(kind, s.trim()),
            _ => {
                debug!("Rejecting {:?} for {} property", s, kind);
                ConversionError::InvalidNumber {
                    kind,
                    value: s.clone(),
                }
            }
        }),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(mismatch(kind, other)),
    }
}

/// Convert a JSON value to a PropertyValue by inspecting its shape.
///
/// Used for the elements of lists and dictionaries, which carry no declared
/// kind. Integers that fit 32 bits become `Integer`, other integers `Long`.
/// Unsigned integers beyond `i64::MAX` fail with `NumericOverflow`.
pub fn json_to_property(value: &Value) -> Result<PropertyValue> {
    let property = match value {
        Value::Null => PropertyValue::Null,
        Value::Bool(b) => PropertyValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => match i32::try_from(i) {
                Ok(small) => PropertyValue::Integer(small),
                Err(_) => PropertyValue::Long(i),
            },
            None if n.is_u64() => return Err(overflow(PropertyKind::Long, n)),
            None => PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => PropertyValue::String(s.clone()),
        Value::Array(arr) => {
            PropertyValue::List(arr.iter().map(json_to_property).collect::<Result<_>>()?)
        }
        Value::Object(obj) => PropertyValue::Dictionary(
            obj.iter()
                .map(|(k, v)| json_to_property(v).map(|p| (k.clone(), p)))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(property)
}

/// Build a dictionary from an array of `[key, value]` pairs.
fn pairs_to_dictionary(pairs: &[Value]) -> Result<PropertyValue> {
    let mut map = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        match pair.as_array().map(Vec::as_slice) {
            Some([Value::String(key), v]) => {
                map.insert(key.clone(), json_to_property(v)?);
            }
            _ => return Err(mismatch(PropertyKind::Dictionary, pair)),
        }
    }
    Ok(PropertyValue::Dictionary(map))
}

impl Converter for ApplicationConverter {
    type Source = Value;
    type Target = PropertyValue;

    fn to_string(&self, value: &Value) -> Result<PropertyValue> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::String(s) => Ok(PropertyValue::String(s.clone())),
            other => Ok(PropertyValue::String(other.to_string())),
        }
    }

    fn to_integer(&self, value: &Value) -> Result<PropertyValue> {
        if value.is_null() {
            return Ok(PropertyValue::Null);
        }
        let i = integral(PropertyKind::Integer, value)?;
        i32::try_from(i)
            .map(PropertyValue::Integer)
            .map_err(|_| overflow(PropertyKind::Integer, i))
    }

    fn to_long(&self, value: &Value) -> Result<PropertyValue> {
        if value.is_null() {
            return Ok(PropertyValue::Null);
        }
        integral(PropertyKind::Long, value).map(PropertyValue::Long)
    }

    fn to_float(&self, value: &Value) -> Result<PropertyValue> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::Number(n) => Ok(PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => s.trim().parse::<f64>().map(PropertyValue::Float).map_err(|_| {
                debug!("Rejecting {:?} for float property", s);
                ConversionError::InvalidNumber {
                    kind: PropertyKind::Float,
                    value: s.clone(),
                }
            }),
            Value::Bool(b) => Ok(PropertyValue::Float(if *b { 1.0 } else { 0.0 })),
            other => Err(mismatch(PropertyKind::Float, other)),
        }
    }

    fn to_list(&self, value: &Value) -> Result<PropertyValue> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::Array(arr) => Ok(PropertyValue::List(
                arr.iter().map(json_to_property).collect::<Result<_>>()?,
            )),
            other => Err(mismatch(PropertyKind::List, other)),
        }
    }

    fn to_dictionary(&self, value: &Value) -> Result<PropertyValue> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::Object(_) => json_to_property(value),
            Value::Array(pairs) => pairs_to_dictionary(pairs),
            other => Err(mismatch(PropertyKind::Dictionary, other)),
        }
    }

    fn to_datetime(&self, value: &Value) -> Result<PropertyValue> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::Number(n) => self.epoch_to_datetime(n),
            other => Err(mismatch(PropertyKind::DateTime, other)),
        }
    }

    fn to_null(&self, value: &Value) -> Result<PropertyValue> {
        if value.is_null() {
            return Ok(PropertyValue::Null);
        }
        debug!("Rejecting non-null JSON {} for null property", json_type_name(value));
        Err(ConversionError::NotNull {
            actual: value.to_string(),
        })
    }
}
