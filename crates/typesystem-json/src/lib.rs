//! JSON type system.
//!
//! This crate implements the [`TypeSystem`] contract for JSON wire values.
//!
//! # Modules
//!
//! - [`forward`] - PropertyValue → JSON value conversion
//! - [`reverse`] - JSON value → PropertyValue conversion
//!
//! # Example
//!
//! ```
//! use typesystem_core::{Converter, PropertyValue};
//! use typesystem_json::JSON_TYPE_SYSTEM;
//!
//! let wire = JSON_TYPE_SYSTEM.database.to_integer(&PropertyValue::Integer(42)).unwrap();
//! assert_eq!(wire, serde_json::json!(42));
//!
//! let back = JSON_TYPE_SYSTEM.application.to_integer(&serde_json::json!("42")).unwrap();
//! assert_eq!(back, PropertyValue::Integer(42));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::DatabaseConverter;
pub use reverse::{json_to_property, ApplicationConverter};

use typesystem_core::{ConversionConfig, TypeSystem};

/// Content type announced by clients using the JSON type system.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Converts properties to and from their JSON representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTypeSystem {
    /// The backend client's content type.
    pub content_type: &'static str,
    /// Converts application values to database values.
    pub database: DatabaseConverter,
    /// Converts database values to application values.
    pub application: ApplicationConverter,
}

impl JsonTypeSystem {
    /// Create the JSON type system with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(ConversionConfig::new())
    }

    /// Create the JSON type system with a custom configuration.
    pub const fn with_config(config: ConversionConfig) -> Self {
        Self {
            content_type: CONTENT_TYPE_JSON,
            database: DatabaseConverter::new(config),
            application: ApplicationConverter::new(config),
        }
    }
}

impl Default for JsonTypeSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSystem for JsonTypeSystem {
    type Wire = serde_json::Value;
    type Database = DatabaseConverter;
    type Application = ApplicationConverter;

    fn content_type(&self) -> &str {
        self.content_type
    }

    fn database(&self) -> &DatabaseConverter {
        &self.database
    }

    fn application(&self) -> &ApplicationConverter {
        &self.application
    }
}

/// Process-wide JSON type system with the default configuration.
pub static JSON_TYPE_SYSTEM: JsonTypeSystem = JsonTypeSystem::new();
