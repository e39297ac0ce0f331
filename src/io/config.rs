// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Print configuration handed to archive writers.
//!
//! The registry never looks inside a [`PrintConfig`]; it is an opaque bag of
//! string keys and values. Concrete writers read the keys they understand and
//! fall back to their own defaults for the rest.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ArchiveError, Result};

/// Printer model key.
pub const KEY_PRINTER_MODEL: &str = "printer_model";
/// Layer height in millimetres.
pub const KEY_LAYER_HEIGHT: &str = "layer_height";
/// Exposure time per layer in seconds.
pub const KEY_EXPOSURE_TIME: &str = "exposure_time";
/// Horizontal display resolution in pixels.
pub const KEY_DISPLAY_PIXELS_X: &str = "display_pixels_x";
/// Vertical display resolution in pixels.
pub const KEY_DISPLAY_PIXELS_Y: &str = "display_pixels_y";

/// Flat, ordered key/value configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintConfig {
    values: BTreeMap<String, String>,
}

impl PrintConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    ///
    /// Only top-level scalar values are accepted; they are stored in their
    /// textual form.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| ArchiveError::parse("PrintConfig", e.to_string()))?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    return Err(ArchiveError::invalid_config(
                        key,
                        "nested values are not supported",
                    ))
                }
            };
            values.insert(key, text);
        }

        Ok(Self { values })
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize the configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ArchiveError::parse("PrintConfig", e.to_string()))
    }

    /// Set a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a value as `f64`, or `default` if the key is absent.
    pub fn get_f64(&self, key: &str, default: f64) -> Result<f64> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ArchiveError::invalid_config(key, format!("'{raw}' is not a number"))),
        }
    }

    /// Get a value as `u32`, or `default` if the key is absent.
    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                ArchiveError::invalid_config(key, format!("'{raw}' is not an unsigned integer"))
            }),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the configuration is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
