//! Core types for graph-typesystem.
//!
//! This crate provides the foundational pieces every pluggable type system
//! builds on:
//!
//! - [`PropertyValue`] - Application-native property values
//! - [`PropertyKind`] - Declared kinds that select a conversion
//! - [`Converter`] - The per-kind conversion contract
//! - [`TypeSystem`] - Content type plus outbound and inbound converters
//! - [`TimestampCodec`] - Epoch encoding for datetime properties
//!
//! # Architecture
//!
//! ```text
//! typesystem-core (this crate)
//!    │
//!    └─── typesystem-json     (JSON wire format)
//! ```
//!
//! # Example
//!
//! ```rust
//! use typesystem_core::{PropertyKind, PropertyValue};
//!
//! let value = PropertyValue::from(42);
//! assert_eq!(value.kind(), Some(PropertyKind::Integer));
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod kinds;
pub mod timestamp;
pub mod values;

pub use config::ConversionConfig;
pub use converter::{Converter, Nullable, TypeSystem};
pub use error::{ConversionError, Result};
pub use kinds::{PropertyKind, UnknownKind};
pub use timestamp::{EpochCodec, EpochUnit, TimestampCodec};
pub use values::PropertyValue;
