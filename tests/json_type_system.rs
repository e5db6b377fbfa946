//! Integration tests for the JSON type system
//!
//! These exercise the converters only through the public `TypeSystem`
//! surface, the way an object mapper would.

use chrono::{TimeZone, Utc};
use graph_typesystem::{
    ConversionConfig, ConversionError, Converter, EpochUnit, JsonTypeSystem, PropertyKind,
    PropertyValue, TypeSystem, JSON_TYPE_SYSTEM,
};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for tests
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

fn round_trip<T: TypeSystem>(ts: &T, kind: PropertyKind, value: &PropertyValue) -> PropertyValue {
    let wire = ts.database().convert(kind, value).unwrap();
    ts.application().convert(kind, &wire).unwrap()
}

#[test]
fn test_descriptor_fields() {
    assert_eq!(JSON_TYPE_SYSTEM.content_type, "application/json");
    assert_eq!(JSON_TYPE_SYSTEM.content_type(), "application/json");

    let database = JSON_TYPE_SYSTEM.database() as *const _ as *const u8;
    let application = JSON_TYPE_SYSTEM.application() as *const _ as *const u8;
    assert_ne!(database, application);

    // The static is a single instance shared by every caller
    assert!(std::ptr::eq(
        JSON_TYPE_SYSTEM.database(),
        JSON_TYPE_SYSTEM.database()
    ));
}

#[test]
fn test_round_trip_identity() {
    init_logging();
    let cases = vec![
        (PropertyKind::String, PropertyValue::string("hello wörld")),
        (PropertyKind::Integer, PropertyValue::Integer(-42)),
        (PropertyKind::Integer, PropertyValue::Integer(i32::MAX)),
        (PropertyKind::Long, PropertyValue::Long(9_876_543_210)),
        (PropertyKind::Long, PropertyValue::Long(i64::MIN)),
        (PropertyKind::Float, PropertyValue::Float(0.1)),
        (PropertyKind::Float, PropertyValue::Float(-1e300)),
        (
            PropertyKind::List,
            PropertyValue::list(vec![
                PropertyValue::Integer(1),
                PropertyValue::string("two"),
                PropertyValue::list(vec![PropertyValue::Bool(true)]),
            ]),
        ),
        (
            PropertyKind::List,
            PropertyValue::list(vec![
                PropertyValue::Long(7),
                PropertyValue::Long(-5_000_000_000),
            ]),
        ),
        (
            PropertyKind::Dictionary,
            PropertyValue::dictionary([
                ("name", PropertyValue::string("Ada")),
                ("score", PropertyValue::Float(9.5)),
                ("visits", PropertyValue::Long(1)),
                (
                    "nested",
                    PropertyValue::dictionary([("k", PropertyValue::Null)]),
                ),
            ]),
        ),
    ];

    for (kind, value) in cases {
        assert_eq!(round_trip(&JSON_TYPE_SYSTEM, kind, &value), value, "{kind}");
    }
}

#[test]
fn test_null_in_null_out() {
    for kind in PropertyKind::ALL {
        let wire = JSON_TYPE_SYSTEM
            .database()
            .convert(kind, &PropertyValue::Null)
            .unwrap();
        assert_eq!(wire, Value::Null, "{kind}");

        let back = JSON_TYPE_SYSTEM.application().convert(kind, &Value::Null).unwrap();
        assert_eq!(back, PropertyValue::Null, "{kind}");
    }
}

#[test]
fn test_to_null_rejects_present_values() {
    init_logging();
    let application = JSON_TYPE_SYSTEM.application();
    assert_eq!(application.to_null(&Value::Null).unwrap(), PropertyValue::Null);

    for present in [json!(0), json!(false), json!(""), json!("null"), json!([null])] {
        let err = application.to_null(&present).unwrap_err();
        assert!(matches!(err, ConversionError::NotNull { .. }), "{present}");
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn test_inbound_coercion() {
    let application = JSON_TYPE_SYSTEM.application();

    assert_eq!(
        application.to_integer(&json!("42")).unwrap(),
        PropertyValue::Integer(42)
    );
    assert!(matches!(
        application.to_integer(&json!("abc")),
        Err(ConversionError::InvalidNumber { .. })
    ));

    assert_eq!(
        application.to_float(&json!("3.14")).unwrap(),
        PropertyValue::Float(3.14)
    );
    assert_eq!(
        application.to_list(&json!([1, 2, 3])).unwrap(),
        PropertyValue::from(vec![1, 2, 3])
    );
}

#[test]
fn test_datetime_round_trip_to_the_second() {
    let dt = Utc.with_ymd_and_hms(2011, 3, 14, 15, 9, 26).unwrap();
    let with_millis = dt + chrono::Duration::milliseconds(535);

    let back = round_trip(
        &JSON_TYPE_SYSTEM,
        PropertyKind::DateTime,
        &PropertyValue::DateTime(with_millis),
    );
    assert_eq!(back, PropertyValue::DateTime(dt));
}

#[test]
fn test_datetime_round_trip_in_milliseconds() {
    let ts = JsonTypeSystem::with_config(
        ConversionConfig::new().with_epoch_unit(EpochUnit::Milliseconds),
    );
    let dt = Utc.with_ymd_and_hms(2011, 3, 14, 15, 9, 26).unwrap()
        + chrono::Duration::milliseconds(535);

    let wire = ts.database().to_datetime(&PropertyValue::DateTime(dt)).unwrap();
    assert_eq!(wire, json!(1_300_115_366_535i64));
    assert_eq!(
        ts.application().to_datetime(&wire).unwrap(),
        PropertyValue::DateTime(dt)
    );
}

#[test]
fn test_outbound_string_normalisation() {
    let database = JSON_TYPE_SYSTEM.database();
    assert_eq!(database.to_string(&PropertyValue::Long(7)).unwrap(), json!("7"));

    let back = JSON_TYPE_SYSTEM
        .application()
        .to_string(&database.to_string(&PropertyValue::Long(7)).unwrap())
        .unwrap();
    assert_eq!(back, PropertyValue::string("7"));
}

#[test]
fn test_swapping_type_systems_keeps_call_sites() {
    fn store<T: TypeSystem>(ts: &T, value: &PropertyValue) -> T::Wire {
        ts.database().convert(PropertyKind::DateTime, value).unwrap()
    }

    let dt = PropertyValue::DateTime(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 2).unwrap());
    let seconds = JSON_TYPE_SYSTEM;
    let millis = JsonTypeSystem::with_config(
        ConversionConfig::new().with_epoch_unit(EpochUnit::Milliseconds),
    );

    assert_eq!(store(&seconds, &dt), json!(2));
    assert_eq!(store(&millis, &dt), json!(2000));
}
