//! Epoch timestamp helpers.
//!
//! Wire formats carry timestamps as numbers counted from the Unix epoch in
//! UTC. `TimestampCodec` is the seam type systems call through; `EpochCodec`
//! is the stock implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConversionError, Result};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Unit an epoch number is counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpochUnit {
    /// Whole seconds since the epoch
    #[default]
    Seconds,

    /// Milliseconds since the epoch
    Milliseconds,
}

impl EpochUnit {
    fn per_second(&self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Milliseconds => 1_000.0,
        }
    }
}

impl fmt::Display for EpochUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds => f.write_str("seconds"),
            Self::Milliseconds => f.write_str("milliseconds"),
        }
    }
}

impl FromStr for EpochUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(Self::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            other => Err(format!("unknown epoch unit: {other}")),
        }
    }
}

/// Conversion between application timestamps and epoch numbers.
pub trait TimestampCodec {
    /// Convert a timestamp to an integral epoch value.
    fn to_timestamp(&self, datetime: &DateTime<Utc>) -> i64;

    /// Convert an integral epoch value back to a timestamp.
    fn to_datetime(&self, epoch: i64) -> Result<DateTime<Utc>>;

    /// Convert a fractional epoch value to a timestamp.
    fn fractional_to_datetime(&self, epoch: f64) -> Result<DateTime<Utc>>;
}

/// Epoch codec counting in a fixed unit.
///
/// Precision below the unit is truncated when encoding, so a round trip
/// through `EpochUnit::Seconds` drops sub-second digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpochCodec {
    unit: EpochUnit,
}

impl EpochCodec {
    /// Create a codec for the given unit.
    pub const fn new(unit: EpochUnit) -> Self {
        Self { unit }
    }

    /// The unit this codec counts in.
    pub fn unit(&self) -> EpochUnit {
        self.unit
    }
}

impl TimestampCodec for EpochCodec {
    fn to_timestamp(&self, datetime: &DateTime<Utc>) -> i64 {
        match self.unit {
            EpochUnit::Seconds => datetime.timestamp(),
            EpochUnit::Milliseconds => datetime.timestamp_millis(),
        }
    }

    fn to_datetime(&self, epoch: i64) -> Result<DateTime<Utc>> {
        let datetime = match self.unit {
            EpochUnit::Seconds => DateTime::from_timestamp(epoch, 0),
            EpochUnit::Milliseconds => DateTime::from_timestamp_millis(epoch),
        };
        datetime.ok_or_else(|| ConversionError::InvalidTimestamp {
            value: epoch.to_string(),
        })
    }

    fn fractional_to_datetime(&self, epoch: f64) -> Result<DateTime<Utc>> {
        let invalid = || ConversionError::InvalidTimestamp {
            value: epoch.to_string(),
        };
        if !epoch.is_finite() {
            return Err(invalid());
        }

        let seconds = epoch / self.unit.per_second();
        let whole = seconds.floor();
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return Err(invalid());
        }

        let mut secs = whole as i64;
        let mut nanos = ((seconds - whole) * NANOS_PER_SEC).round() as u32;
        if nanos >= 1_000_000_000 {
            secs += 1;
            nanos = 0;
        }
        DateTime::from_timestamp(secs, nanos).ok_or_else(invalid)
    }
}
