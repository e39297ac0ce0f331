// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Factory capabilities stored in a format descriptor.
//!
//! Each concrete format implements [`WriterFactory`] and, if it can be
//! imported, [`ReaderFactory`]. The registry stores them behind `Arc` so a
//! lookup hands out a cheap, independent handle.

use std::path::Path;
use std::sync::Arc;

use crate::core::ImportQuality;
use crate::io::config::PrintConfig;
use crate::io::progress::Progress;
use crate::io::traits::{ArchiveReader, ArchiveWriter};

/// Builds archive writers for one format.
pub trait WriterFactory: Send + Sync {
    /// Create a writer for the given configuration.
    ///
    /// The configuration is opaque to the registry; the writer enforces any
    /// format-specific constraints when it exports.
    fn build_writer(&self, config: &PrintConfig) -> Box<dyn ArchiveWriter>;
}

/// Builds archive readers for one format.
pub trait ReaderFactory: Send + Sync {
    /// Create a reader for the archive at `path`.
    ///
    /// Nothing is read until [`ArchiveReader::read`] is called; `progress` is
    /// only invoked from there.
    fn build_reader(
        &self,
        path: &Path,
        quality: ImportQuality,
        progress: Progress,
    ) -> Box<dyn ArchiveReader>;
}

/// Shared handle to a writer factory.
pub type SharedWriterFactory = Arc<dyn WriterFactory>;

/// Shared handle to a reader factory.
pub type SharedReaderFactory = Arc<dyn ReaderFactory>;
