//! Conversion configuration shared by all type systems.

use serde::{Deserialize, Serialize};

use crate::timestamp::{EpochCodec, EpochUnit};

/// Configuration options for a type system's converters.
///
/// # Example
///
/// ```
/// use typesystem_core::{ConversionConfig, EpochUnit};
///
/// let config = ConversionConfig::new().with_epoch_unit(EpochUnit::Milliseconds);
/// assert_eq!(config.epoch_unit, EpochUnit::Milliseconds);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Unit datetime properties are counted in on the wire.
    pub epoch_unit: EpochUnit,
}

impl ConversionConfig {
    /// Create the default configuration (epoch seconds).
    pub const fn new() -> Self {
        Self {
            epoch_unit: EpochUnit::Seconds,
        }
    }

    /// Set the epoch unit.
    pub const fn with_epoch_unit(mut self, epoch_unit: EpochUnit) -> Self {
        self.epoch_unit = epoch_unit;
        self
    }

    /// Timestamp codec matching this configuration.
    pub const fn codec(&self) -> EpochCodec {
        EpochCodec::new(self.epoch_unit)
    }
}
