//! The converter contract and the type-system descriptor.
//!
//! A type system pairs two converters over the same wire format: one turning
//! application values into wire values ("to database") and one doing the
//! reverse ("to application"). Both implement [`Converter`], which has one
//! method per [`PropertyKind`].
//!
//! ```text
//!              database()                     application()
//! PropertyValue ─────────► wire value   wire value ─────────► PropertyValue
//! ```

use crate::error::Result;
use crate::kinds::PropertyKind;
use crate::values::PropertyValue;

/// A value domain with a null-equivalent.
pub trait Nullable {
    /// The null-equivalent of this domain.
    fn null() -> Self;

    /// Check if this value is the null-equivalent.
    fn is_null(&self) -> bool;
}

impl Nullable for PropertyValue {
    fn null() -> Self {
        PropertyValue::Null
    }

    fn is_null(&self) -> bool {
        PropertyValue::is_null(self)
    }
}

impl Nullable for serde_json::Value {
    fn null() -> Self {
        serde_json::Value::Null
    }

    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }
}

/// Conversion methods called per declared property kind.
///
/// Every method borrows its input and returns a new value. A null input
/// yields a null output for every method except [`Converter::to_null`],
/// whose behavior depends on the direction.
pub trait Converter {
    /// Domain values are read from.
    type Source: Nullable;

    /// Domain values are written to.
    type Target: Nullable;

    /// Convert a string property.
    fn to_string(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a 32-bit integer property.
    fn to_integer(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a 64-bit integer property.
    fn to_long(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a float property.
    fn to_float(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a list property.
    fn to_list(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a dictionary property.
    fn to_dictionary(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a datetime property.
    fn to_datetime(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Convert a null property.
    fn to_null(&self, value: &Self::Source) -> Result<Self::Target>;

    /// Dispatch to the method matching `kind`.
    fn convert(&self, kind: PropertyKind, value: &Self::Source) -> Result<Self::Target> {
        match kind {
            PropertyKind::String => self.to_string(value),
            PropertyKind::Integer => self.to_integer(value),
            PropertyKind::Long => self.to_long(value),
            PropertyKind::Float => self.to_float(value),
            PropertyKind::List => self.to_list(value),
            PropertyKind::Dictionary => self.to_dictionary(value),
            PropertyKind::DateTime => self.to_datetime(value),
            PropertyKind::Null => self.to_null(value),
        }
    }
}

/// A swappable bundle of a content type and its two converters.
///
/// The mapping layer selects one type system and routes every property
/// through it, so switching wire formats never touches call sites.
pub trait TypeSystem {
    /// Wire representation produced by [`TypeSystem::database`].
    type Wire: Nullable;

    /// Converter from application values to wire values.
    type Database: Converter<Source = PropertyValue, Target = Self::Wire>;

    /// Converter from wire values to application values.
    type Application: Converter<Source = Self::Wire, Target = PropertyValue>;

    /// Content type the client announces for this wire format.
    fn content_type(&self) -> &str;

    /// The outbound converter.
    fn database(&self) -> &Self::Database;

    /// The inbound converter.
    fn application(&self) -> &Self::Application;
}
