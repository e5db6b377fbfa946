//! Loading conversion settings from configuration files and the environment.
//!
//! The settings live under a `[conversion]` table so they can sit inside a
//! larger application config:
//!
//! ```toml
//! [conversion]
//! epoch_unit = "milliseconds"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use typesystem_core::{ConversionConfig, EpochUnit};

/// Environment variable overriding the epoch unit.
pub const EPOCH_UNIT_ENV: &str = "GRAPH_TYPESYSTEM_EPOCH_UNIT";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    conversion: ConversionConfig,
}

/// Parse conversion settings from a TOML document.
///
/// Missing tables and keys fall back to their defaults.
pub fn load_conversion_config(toml_str: &str) -> anyhow::Result<ConversionConfig> {
    let settings: Settings =
        toml::from_str(toml_str).context("Failed to parse conversion settings")?;
    debug!(
        "Loaded conversion config: epoch_unit={}",
        settings.conversion.epoch_unit
    );
    Ok(settings.conversion)
}

/// Read conversion settings from a TOML file.
pub fn load_conversion_config_file(path: impl AsRef<Path>) -> anyhow::Result<ConversionConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    load_conversion_config(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Apply overrides from the process environment on top of `base`.
pub fn conversion_config_from_env(base: ConversionConfig) -> anyhow::Result<ConversionConfig> {
    conversion_config_from_lookup(base, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup on top of `base`.
pub fn conversion_config_from_lookup<F>(
    base: ConversionConfig,
    lookup: F,
) -> anyhow::Result<ConversionConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(EPOCH_UNIT_ENV) else {
        return Ok(base);
    };
    let unit: EpochUnit = raw
        .parse()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid {EPOCH_UNIT_ENV} value: {raw}"))?;
    debug!("Epoch unit overridden from environment: {unit}");
    Ok(base.with_epoch_unit(unit))
}
