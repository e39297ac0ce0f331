// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared data types exchanged with archive readers and writers.

use crate::core::ImportQuality;

use super::config::PrintConfig;

/// One sliced layer as stored in an archive.
///
/// The payload is an encoded raster image; its encoding is owned by the
/// concrete format and is not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterLayer {
    /// Encoded raster bytes
    pub data: Vec<u8>,
}

impl RasterLayer {
    /// Create a layer from encoded raster bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Contents recovered from an archive by an [`ArchiveReader`](super::traits::ArchiveReader).
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedArchive {
    /// Format id recorded in the archive
    pub format_id: String,
    /// Configuration stored alongside the layers
    pub config: PrintConfig,
    /// Layers in print order
    pub layers: Vec<RasterLayer>,
    /// Quality the archive was imported with
    pub quality: ImportQuality,
}

impl ImportedArchive {
    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
