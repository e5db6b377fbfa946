//! Forward conversion: PropertyValue → JSON value.
//!
//! JSON already models numbers, lists and objects natively, so most kinds
//! pass straight through. Strings are normalised to text and datetimes are
//! written as epoch numbers.

use serde_json::{json, Map, Number, Value};
use typesystem_core::{
    ConversionConfig, ConversionError, Converter, EpochCodec, PropertyKind, PropertyValue, Result,
    TimestampCodec,
};

/// Converts application values to JSON values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseConverter {
    codec: EpochCodec,
}

impl DatabaseConverter {
    /// Create a converter using the given configuration.
    pub const fn new(config: ConversionConfig) -> Self {
        Self {
            codec: config.codec(),
        }
    }

    /// Encode a value in its natural JSON form.
    ///
    /// Datetimes nested in containers use the same epoch encoding as
    /// datetime properties.
    pub fn encode(&self, value: &PropertyValue) -> Result<Value> {
        match value {
            PropertyValue::Null => Ok(Value::Null),
            PropertyValue::Bool(b) => Ok(json!(*b)),
            PropertyValue::Integer(i) => Ok(json!(*i)),
            PropertyValue::Long(i) => Ok(json!(*i)),
            PropertyValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or(ConversionError::NonFiniteFloat(*f)),
            PropertyValue::String(s) => Ok(json!(s)),
            PropertyValue::DateTime(dt) => Ok(json!(self.codec.to_timestamp(dt))),
            PropertyValue::List(values) => values
                .iter()
                .map(|v| self.encode(v))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            PropertyValue::Dictionary(map) => {
                let mut obj = Map::new();
                for (key, v) in map {
                    obj.insert(key.clone(), self.encode(v)?);
                }
                Ok(Value::Object(obj))
            }
        }
    }
}

impl Converter for DatabaseConverter {
    type Source = PropertyValue;
    type Target = Value;

    fn to_string(&self, value: &PropertyValue) -> Result<Value> {
        match value {
            PropertyValue::Null => Ok(Value::Null),
            PropertyValue::String(s) => Ok(json!(s)),
            other => Ok(json!(other.to_string())),
        }
    }

    fn to_integer(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }

    fn to_long(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }

    fn to_float(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }

    fn to_list(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }

    fn to_dictionary(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }

    fn to_datetime(&self, value: &PropertyValue) -> Result<Value> {
        match value {
            PropertyValue::Null => Ok(Value::Null),
            PropertyValue::DateTime(dt) => Ok(json!(self.codec.to_timestamp(dt))),
            other => Err(ConversionError::mismatch(
                PropertyKind::DateTime,
                other.type_name(),
            )),
        }
    }

    fn to_null(&self, value: &PropertyValue) -> Result<Value> {
        self.encode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use typesystem_core::EpochUnit;

    fn converter() -> DatabaseConverter {
        DatabaseConverter::default()
    }

    #[test]
    fn test_null_passes_through_every_kind() {
        for kind in PropertyKind::ALL {
            let out = converter().convert(kind, &PropertyValue::Null).unwrap();
            assert!(out.is_null(), "{kind} should map null to null");
        }
    }

    #[test]
    fn test_string_conversion() {
        let out = converter().to_string(&PropertyValue::string("hello")).unwrap();
        assert_eq!(out, json!("hello"));
    }

    #[test]
    fn test_string_coerces_other_values() {
        let c = converter();
        assert_eq!(c.to_string(&PropertyValue::Integer(42)).unwrap(), json!("42"));
        assert_eq!(c.to_string(&PropertyValue::Float(1.5)).unwrap(), json!("1.5"));
        assert_eq!(c.to_string(&PropertyValue::Bool(false)).unwrap(), json!("false"));
        assert_eq!(
            c.to_string(&PropertyValue::from(vec!["a", "b"])).unwrap(),
            json!(r#"["a","b"]"#)
        );
    }

    #[test]
    fn test_numbers_pass_through() {
        let c = converter();
        assert_eq!(c.to_integer(&PropertyValue::Integer(12345)).unwrap(), json!(12345));
        assert_eq!(
            c.to_long(&PropertyValue::Long(9_876_543_210)).unwrap(),
            json!(9_876_543_210i64)
        );

        let out = c.to_float(&PropertyValue::Float(1.234)).unwrap();
        if let Some(f) = out.as_f64() {
            assert!((f - 1.234).abs() < 0.0001);
        } else {
            panic!("Expected number");
        }
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        let err = converter()
            .to_float(&PropertyValue::Float(f64::INFINITY))
            .unwrap_err();
        assert!(matches!(err, ConversionError::NonFiniteFloat(_)));
    }

    #[test]
    fn test_list_conversion() {
        let out = converter()
            .to_list(&PropertyValue::from(vec![1, 2, 3]))
            .unwrap();
        assert_eq!(out, json!([1, 2, 3]));
    }

    #[test]
    fn test_dictionary_conversion() {
        let value = PropertyValue::dictionary([
            ("name", PropertyValue::string("test")),
            ("count", PropertyValue::Integer(42)),
            ("tags", PropertyValue::from(vec!["x"])),
        ]);
        let out = converter().to_dictionary(&value).unwrap();
        assert!(out.is_object());
        assert_eq!(out["name"], json!("test"));
        assert_eq!(out["count"], json!(42));
        assert_eq!(out["tags"], json!(["x"]));
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let out = converter().to_datetime(&PropertyValue::DateTime(dt)).unwrap();
        assert_eq!(out, json!(1_718_447_400));

        let millis = DatabaseConverter::new(
            ConversionConfig::new().with_epoch_unit(EpochUnit::Milliseconds),
        );
        let out = millis.to_datetime(&PropertyValue::DateTime(dt)).unwrap();
        assert_eq!(out, json!(1_718_447_400_000i64));
    }

    #[test]
    fn test_datetime_rejects_other_values() {
        let err = converter()
            .to_datetime(&PropertyValue::string("2024-06-15"))
            .unwrap_err();
        assert_eq!(err, ConversionError::mismatch(PropertyKind::DateTime, "string"));
    }

    #[test]
    fn test_nested_datetime_uses_epoch() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 1, 0).unwrap();
        let value = PropertyValue::list(vec![PropertyValue::DateTime(dt)]);
        assert_eq!(converter().to_list(&value).unwrap(), json!([60]));
    }

    #[test]
    fn test_null_kind_is_identity() {
        let c = converter();
        assert_eq!(c.to_null(&PropertyValue::Null).unwrap(), Value::Null);
        assert_eq!(c.to_null(&PropertyValue::Bool(true)).unwrap(), json!(true));
    }
}
