//! graph-typesystem
//!
//! Pluggable property type systems for graph-database object mappers.
//!
//! A type system converts property values between the application and a
//! database wire format. Each one bundles a content type with a "to
//! database" converter and a "to application" converter, so the mapping
//! layer can swap wire formats as a unit.
//!
//! # Crates
//!
//! - `typesystem_core` - Property values, kinds, and the converter contract
//! - `typesystem_json` - The JSON type system
//!
//! # Usage
//!
//! ```
//! use graph_typesystem::{Converter, PropertyKind, PropertyValue, TypeSystem, JSON_TYPE_SYSTEM};
//!
//! let ts = &JSON_TYPE_SYSTEM;
//! assert_eq!(ts.content_type(), "application/json");
//!
//! let wire = ts.database().convert(PropertyKind::List, &PropertyValue::from(vec![1, 2])).unwrap();
//! let back = ts.application().convert(PropertyKind::List, &wire).unwrap();
//! assert_eq!(back, PropertyValue::from(vec![1, 2]));
//! ```

pub mod config;
pub mod rows;

// Re-export the type system crates for convenience
pub use typesystem_core as core_types;
pub use typesystem_json as json;

pub use rows::{properties_from_wire, properties_to_wire, PropertyError};
pub use typesystem_core::{
    ConversionConfig, ConversionError, Converter, EpochCodec, EpochUnit, Nullable, PropertyKind,
    PropertyValue, TimestampCodec, TypeSystem,
};
pub use typesystem_json::{JsonTypeSystem, CONTENT_TYPE_JSON, JSON_TYPE_SYSTEM};

/// Build the JSON type system from a TOML config document.
///
/// Environment overrides from [`config::EPOCH_UNIT_ENV`] are applied on top.
pub fn json_type_system_from_toml(toml_str: &str) -> anyhow::Result<JsonTypeSystem> {
    let config = config::load_conversion_config(toml_str)?;
    let config = config::conversion_config_from_env(config)?;
    Ok(JsonTypeSystem::with_config(config))
}
