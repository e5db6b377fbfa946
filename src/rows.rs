//! Whole-entity conversion driven by a property schema.
//!
//! A schema is a list of `(name, kind)` pairs. Each property is routed
//! through the converter method matching its kind; failures are tagged with
//! the property name so callers can report which field was bad.

use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;
use typesystem_core::{
    ConversionError, Converter, Nullable, PropertyKind, PropertyValue, TypeSystem,
};

/// A conversion failure for a named property.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Property '{property}': {source}")]
pub struct PropertyError {
    /// Name of the property that failed to convert.
    pub property: String,
    /// The underlying conversion error.
    #[source]
    pub source: ConversionError,
}

impl PropertyError {
    fn new(property: &str, source: ConversionError) -> Self {
        Self {
            property: property.to_string(),
            source,
        }
    }
}

/// Convert a property map to wire values.
///
/// Properties missing from `properties` are converted as null. Properties
/// not named in `schema` are dropped.
pub fn properties_to_wire<T: TypeSystem>(
    type_system: &T,
    properties: &HashMap<String, PropertyValue>,
    schema: &[(String, PropertyKind)],
) -> Result<HashMap<String, T::Wire>, PropertyError> {
    let converter = type_system.database();
    let null = PropertyValue::Null;
    let mut result = HashMap::with_capacity(schema.len());
    for (name, kind) in schema {
        let value = properties.get(name).unwrap_or(&null);
        trace!("Converting property '{}' ({}) to wire", name, kind);
        let wire = converter
            .convert(*kind, value)
            .map_err(|e| PropertyError::new(name, e))?;
        result.insert(name.clone(), wire);
    }
    Ok(result)
}

/// Convert wire values back to a property map.
///
/// Properties missing from `wire` are converted as null. Properties not
/// named in `schema` are dropped.
pub fn properties_from_wire<T: TypeSystem>(
    type_system: &T,
    wire: &HashMap<String, T::Wire>,
    schema: &[(String, PropertyKind)],
) -> Result<HashMap<String, PropertyValue>, PropertyError> {
    let converter = type_system.application();
    let null = <T::Wire as Nullable>::null();
    let mut result = HashMap::with_capacity(schema.len());
    for (name, kind) in schema {
        let value = wire.get(name).unwrap_or(&null);
        trace!("Converting property '{}' ({}) from wire", name, kind);
        let property = converter
            .convert(*kind, value)
            .map_err(|e| PropertyError::new(name, e))?;
        result.insert(name.clone(), property);
    }
    Ok(result)
}
