// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Archive format registry.
//!
//! Callers name a format by its id and get back factories that build a
//! writer or reader for it, without depending on the concrete format.
//!
//! The built-in catalog is constructed on first use and lives for the rest
//! of the process. Every query returns an owned copy.
//!
//! # Example
//!
//! ```no_run
//! use slaformats::io::config::PrintConfig;
//! use slaformats::registry;
//!
//! if let Some(factory) = registry::writer_factory_for("SL1") {
//!     let mut writer = factory.build_writer(&PrintConfig::new());
//!     writer.export("print.sl1".as_ref())?;
//! }
//! # Ok::<(), slaformats::ArchiveError>(())
//! ```

pub mod builtin;
pub mod catalog;
pub mod descriptor;
pub mod factory;
pub mod global;

pub use builtin::{anycubic_format, builtin_catalog, builtin_formats};
pub use catalog::Catalog;
pub use descriptor::FormatDescriptor;
pub use factory::{ReaderFactory, SharedReaderFactory, SharedWriterFactory, WriterFactory};
pub use global::CatalogCell;

use std::collections::BTreeSet;

static BUILTIN: CatalogCell = CatalogCell::new(builtin_catalog);

/// Every registered format, ordered by id.
pub fn enumerate_formats() -> BTreeSet<FormatDescriptor> {
    BUILTIN.enumerate_formats()
}

/// Descriptor registered under `id`.
pub fn find_format(id: &str) -> Option<FormatDescriptor> {
    BUILTIN.find_format(id)
}

/// Writer factory for `id`.
///
/// Returns `None` for unknown ids.
pub fn writer_factory_for(id: &str) -> Option<SharedWriterFactory> {
    BUILTIN.writer_factory_for(id)
}

/// Reader factory for `id`.
///
/// Returns `None` both for unknown ids and for write-only formats; use
/// [`find_format`] to tell the two apart.
pub fn reader_factory_for(id: &str) -> Option<SharedReaderFactory> {
    BUILTIN.reader_factory_for(id)
}

/// Primary extension followed by the aliases, in declared order.
pub fn extensions_for(descriptor: &FormatDescriptor) -> Vec<String> {
    descriptor.extensions()
}

/// Registered formats that use the extension `ext`, ordered by id.
pub fn formats_for_extension(ext: &str) -> Vec<FormatDescriptor> {
    BUILTIN.formats_for_extension(ext)
}
