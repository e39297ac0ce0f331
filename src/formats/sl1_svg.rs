// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! SL1SVG archive format: SL1 with vector layers.
//!
//! The same writer also serves the write-only SL2 format. SL2 exports are
//! plain SL1SVG archives; only the writer handle reports the SL2 id.

use std::path::Path;

use crate::core::ImportQuality;
use crate::io::config::PrintConfig;
use crate::io::progress::Progress;
use crate::io::traits::{ArchiveReader, ArchiveWriter};
use crate::registry::{ReaderFactory, WriterFactory};

use super::container::{LayerArchiveReader, LayerArchiveWriter};

/// Format id.
pub const SL1SVG_ID: &str = "SL1SVG";

/// Format id of the write-only SL2 variant.
pub const SL2_ID: &str = "SL2";

/// Container magic.
pub const SL1SVG_MAGIC: [u8; 8] = *b"SL1SVG\0\0";

/// Configuration key naming the layer encoding.
pub const KEY_RASTER_ENCODING: &str = "raster_encoding";

/// Writer and reader factories for SVG-layered archives.
#[derive(Debug, Clone)]
pub struct Sl1SvgFormat {
    format_id: &'static str,
}

impl Sl1SvgFormat {
    /// Factories for SL1SVG archives.
    pub fn sl1svg() -> Self {
        Self {
            format_id: SL1SVG_ID,
        }
    }

    /// Factories for SL2 archives.
    pub fn sl2() -> Self {
        Self { format_id: SL2_ID }
    }
}

impl Default for Sl1SvgFormat {
    fn default() -> Self {
        Self::sl1svg()
    }
}

impl WriterFactory for Sl1SvgFormat {
    fn build_writer(&self, config: &PrintConfig) -> Box<dyn ArchiveWriter> {
        let config = config.clone().with(KEY_RASTER_ENCODING, "svg");
        Box::new(
            LayerArchiveWriter::new(SL1SVG_MAGIC, self.format_id, config)
                .with_container_id(SL1SVG_ID),
        )
    }
}

impl ReaderFactory for Sl1SvgFormat {
    fn build_reader(
        &self,
        path: &Path,
        quality: ImportQuality,
        progress: Progress,
    ) -> Box<dyn ArchiveReader> {
        Box::new(LayerArchiveReader::new(
            SL1SVG_MAGIC,
            self.format_id,
            path,
            quality,
            progress,
        ))
    }
}
