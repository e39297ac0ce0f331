// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! SL1 archive format.

use std::path::Path;

use crate::core::ImportQuality;
use crate::io::config::{PrintConfig, KEY_PRINTER_MODEL};
use crate::io::progress::Progress;
use crate::io::traits::{ArchiveReader, ArchiveWriter};
use crate::registry::{ReaderFactory, WriterFactory};

use super::container::{LayerArchiveReader, LayerArchiveWriter};

/// Format id.
pub const SL1_ID: &str = "SL1";

/// Container magic.
pub const SL1_MAGIC: [u8; 8] = *b"SL1ARCH\0";

/// Printer model recorded when the configuration does not name one.
pub const DEFAULT_PRINTER_MODEL: &str = "SL1";

/// Writer and reader factories for SL1 archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sl1Format;

impl WriterFactory for Sl1Format {
    fn build_writer(&self, config: &PrintConfig) -> Box<dyn ArchiveWriter> {
        let mut config = config.clone();
        if config.get(KEY_PRINTER_MODEL).is_none() {
            config.set(KEY_PRINTER_MODEL, DEFAULT_PRINTER_MODEL);
        }
        Box::new(LayerArchiveWriter::new(SL1_MAGIC, SL1_ID, config))
    }
}

impl ReaderFactory for Sl1Format {
    fn build_reader(
        &self,
        path: &Path,
        quality: ImportQuality,
        progress: Progress,
    ) -> Box<dyn ArchiveReader> {
        Box::new(LayerArchiveReader::new(
            SL1_MAGIC, SL1_ID, path, quality, progress,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_defaults_printer_model() {
        let writer = Sl1Format.build_writer(&PrintConfig::new());
        assert_eq!(writer.format_id(), SL1_ID);
        assert_eq!(writer.config().get(KEY_PRINTER_MODEL), Some("SL1"));
    }

    #[test]
    fn test_writer_keeps_given_model() {
        let config = PrintConfig::new().with(KEY_PRINTER_MODEL, "SL1S");
        let writer = Sl1Format.build_writer(&config);
        assert_eq!(writer.config().get(KEY_PRINTER_MODEL), Some("SL1S"));
    }

    #[test]
    fn test_reader_records_arguments() {
        let reader = Sl1Format.build_reader(
            Path::new("print.sl1"),
            ImportQuality::Accurate,
            Progress::none(),
        );
        assert_eq!(reader.format_id(), SL1_ID);
        assert_eq!(reader.path(), Path::new("print.sl1"));
        assert_eq!(reader.quality(), ImportQuality::Accurate);
    }
}
