// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Lazily built, process-wide catalog access.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use tracing::{debug, trace};

use super::catalog::Catalog;
use super::descriptor::FormatDescriptor;
use super::factory::{SharedReaderFactory, SharedWriterFactory};

/// A catalog that is built on first access.
///
/// Construction runs exactly once even when many threads race on the first
/// query; every caller observes the fully built catalog. Queries return
/// owned copies, never references into the catalog.
pub struct CatalogCell {
    cell: OnceLock<Catalog>,
    init: fn() -> Catalog,
}

impl CatalogCell {
    /// Create a cell that builds its catalog with `init`.
    pub const fn new(init: fn() -> Catalog) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    fn catalog(&self) -> &Catalog {
        self.cell.get_or_init(|| {
            let catalog = (self.init)();
            debug!(formats = catalog.len(), "built archive format catalog");
            catalog
        })
    }

    /// Check whether the catalog has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Copy of every registered descriptor, ordered by id.
    pub fn enumerate_formats(&self) -> BTreeSet<FormatDescriptor> {
        self.catalog().to_set()
    }

    /// Copy of the descriptor registered under `id`.
    pub fn find_format(&self, id: &str) -> Option<FormatDescriptor> {
        let found = self.catalog().get(id).cloned();
        if found.is_none() {
            trace!(format_id = id, "unknown archive format");
        }
        found
    }

    /// Writer factory for `id`, or `None` if the id is unknown.
    pub fn writer_factory_for(&self, id: &str) -> Option<SharedWriterFactory> {
        self.catalog().writer_factory(id)
    }

    /// Reader factory for `id`, or `None` if the id is unknown or the
    /// format is write-only.
    pub fn reader_factory_for(&self, id: &str) -> Option<SharedReaderFactory> {
        self.catalog().reader_factory(id)
    }

    /// Descriptors whose extensions include `ext`, ordered by id.
    pub fn formats_for_extension(&self, ext: &str) -> Vec<FormatDescriptor> {
        self.catalog().formats_for_extension(ext)
    }
}
