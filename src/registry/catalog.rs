// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Catalog of format descriptors keyed by format id.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use super::descriptor::FormatDescriptor;
use super::factory::{SharedReaderFactory, SharedWriterFactory};

/// Immutable mapping from format id to descriptor.
///
/// Iteration is ordered by id. A catalog is built once and never modified
/// afterwards; there is no API to add or remove formats.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    formats: BTreeMap<String, FormatDescriptor>,
}

impl Catalog {
    /// Build a catalog from descriptors.
    ///
    /// When two descriptors share an id the first one is kept and the later
    /// one is dropped with a warning.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = FormatDescriptor>,
    {
        let mut formats = BTreeMap::new();
        for descriptor in descriptors {
            match formats.entry(descriptor.id().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
                Entry::Occupied(_) => {
                    warn!(
                        format_id = descriptor.id(),
                        extension = descriptor.primary_extension(),
                        "duplicate format id, keeping the first registration"
                    );
                }
            }
        }
        Self { formats }
    }

    /// Find a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&FormatDescriptor> {
        self.formats.get(id)
    }

    /// Writer factory for `id`, if registered.
    pub fn writer_factory(&self, id: &str) -> Option<SharedWriterFactory> {
        self.get(id).and_then(FormatDescriptor::writer_factory)
    }

    /// Reader factory for `id`, if registered and readable.
    pub fn reader_factory(&self, id: &str) -> Option<SharedReaderFactory> {
        self.get(id).and_then(FormatDescriptor::reader_factory)
    }

    /// All descriptors whose extensions include `ext`, ordered by id.
    pub fn formats_for_extension(&self, ext: &str) -> Vec<FormatDescriptor> {
        self.iter()
            .filter(|desc| desc.matches_extension(ext))
            .cloned()
            .collect()
    }

    /// Iterate over descriptors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.formats.values()
    }

    /// Copy every descriptor into an ordered set.
    pub fn to_set(&self) -> BTreeSet<FormatDescriptor> {
        self.iter().cloned().collect()
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_descriptors([
            FormatDescriptor::new("SL2", "sl1_svg"),
            FormatDescriptor::new("SL1", "sl1")
                .with_display_name("first")
                .with_aliases(["sl1s", "zip"]),
            FormatDescriptor::new("SL1SVG", "sl1_svg"),
            FormatDescriptor::new("SL1", "dup").with_display_name("second"),
        ])
    }

    #[test]
    fn test_first_registration_wins() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        let sl1 = catalog.get("SL1").unwrap();
        assert_eq!(sl1.display_name(), "first");
        assert_eq!(sl1.primary_extension(), "sl1");
    }

    #[test]
    fn test_iteration_ordered_by_id() {
        let ids: Vec<_> = catalog().iter().map(|d| d.id().to_string()).collect();
        assert_eq!(ids, vec!["SL1", "SL1SVG", "SL2"]);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = catalog();
        assert!(catalog.get("sl1").is_none());
        assert!(catalog.get("SL").is_none());
        assert!(catalog.writer_factory("__unknown__").is_none());
        assert!(catalog.reader_factory("__unknown__").is_none());
    }

    #[test]
    fn test_shared_extension() {
        let ids: Vec<_> = catalog()
            .formats_for_extension("sl1_svg")
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(ids, vec!["SL1SVG", "SL2"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.to_set().is_empty());
    }
}
