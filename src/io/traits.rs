// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core traits implemented by every concrete archive format.
//!
//! The export and import pipelines only ever hold `Box<dyn ArchiveWriter>`
//! and `Box<dyn ArchiveReader>` obtained through the registry factories, so
//! they never link against a concrete format.

use std::any::Any;
use std::path::Path;

use crate::core::ImportQuality;
use crate::Result;

use super::config::PrintConfig;
use super::metadata::{ImportedArchive, RasterLayer};

/// Trait for writing a sliced print job into an archive.
///
/// # Example
///
/// ```no_run
/// use slaformats::io::traits::ArchiveWriter;
///
/// fn export(writer: &mut dyn ArchiveWriter) -> slaformats::Result<()> {
///     writer.export("print.sl1".as_ref())
/// }
/// ```
pub trait ArchiveWriter: Send {
    /// Id of the format this writer produces.
    fn format_id(&self) -> &str;

    /// Configuration the writer was built with.
    fn config(&self) -> &PrintConfig;

    /// Append one layer in print order.
    fn add_layer(&mut self, layer: RasterLayer);

    /// Append several layers in print order.
    fn add_layers(&mut self, layers: Vec<RasterLayer>) {
        for layer in layers {
            self.add_layer(layer);
        }
    }

    /// Number of layers added so far.
    fn layer_count(&self) -> usize;

    /// Write the archive to `path`.
    fn export(&mut self, path: &Path) -> Result<()>;

    /// Downcast to `Any` for accessing format-specific functionality.
    fn as_any(&self) -> &dyn Any;
}

/// Trait for reading a sliced print job back from an archive.
pub trait ArchiveReader: Send {
    /// Id of the format this reader expects.
    fn format_id(&self) -> &str;

    /// Path of the archive to read.
    fn path(&self) -> &Path;

    /// Quality the archive will be imported with.
    fn quality(&self) -> ImportQuality;

    /// Read the whole archive, reporting progress along the way.
    fn read(&mut self) -> Result<ImportedArchive>;

    /// Downcast to `Any` for accessing format-specific functionality.
    fn as_any(&self) -> &dyn Any;
}
