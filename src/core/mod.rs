// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout slaformats.
//!
//! This module provides the foundational types for the library:
//! - [`ArchiveError`] - Error handling for archive I/O and configuration
//! - [`ImportQuality`] - Quality selector handed to archive readers

pub mod error;

pub use error::{ArchiveError, Result};

use serde::{Deserialize, Serialize};

/// Import quality selector passed through to archive readers.
///
/// Readers trade reconstruction accuracy against speed based on this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportQuality {
    /// Coarse reconstruction, fastest
    Fast,
    /// Default trade-off
    #[default]
    Balanced,
    /// Slowest, most faithful reconstruction
    Accurate,
}

/// Error returned when parsing an `ImportQuality` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseImportQualityError {
    _private: (),
}

impl std::fmt::Display for ParseImportQualityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid import quality, expected 'fast', 'balanced', or 'accurate'"
        )
    }
}

impl std::error::Error for ParseImportQualityError {}

impl std::str::FromStr for ImportQuality {
    type Err = ParseImportQualityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "draft" => Ok(ImportQuality::Fast),
            "balanced" => Ok(ImportQuality::Balanced),
            "accurate" => Ok(ImportQuality::Accurate),
            _ => Err(ParseImportQualityError { _private: () }),
        }
    }
}

impl ImportQuality {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportQuality::Fast => "fast",
            ImportQuality::Balanced => "balanced",
            ImportQuality::Accurate => "accurate",
        }
    }
}
