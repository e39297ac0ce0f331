// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format descriptor: the immutable record describing one archive format.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::factory::{ReaderFactory, SharedReaderFactory, SharedWriterFactory, WriterFactory};

/// Describes one archive format and the factories that handle it.
///
/// Equality, ordering and hashing consider only [`id`](Self::id): two
/// descriptors with the same id are the same format regardless of their
/// other fields.
///
/// # Example
///
/// ```
/// use slaformats::registry::FormatDescriptor;
///
/// let desc = FormatDescriptor::new("SL1", "sl1").with_aliases(["sl1s", "zip"]);
/// assert_eq!(desc.extensions(), vec!["sl1", "sl1s", "zip"]);
/// assert!(!desc.supports_read());
/// ```
#[derive(Clone)]
pub struct FormatDescriptor {
    id: String,
    display_name: String,
    primary_extension: String,
    extension_aliases: Vec<String>,
    writer: Option<SharedWriterFactory>,
    reader: Option<SharedReaderFactory>,
}

impl FormatDescriptor {
    /// Create a descriptor with an id and a primary extension (without the
    /// leading dot). Everything else starts empty.
    pub fn new(id: impl Into<String>, primary_extension: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            primary_extension: primary_extension.into(),
            extension_aliases: Vec::new(),
            writer: None,
            reader: None,
        }
    }

    /// Set the human-readable name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the extension aliases, in declaration order.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extension_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the writer factory.
    pub fn with_writer<W: WriterFactory + 'static>(mut self, factory: W) -> Self {
        self.writer = Some(Arc::new(factory));
        self
    }

    /// Attach the reader factory.
    pub fn with_reader<R: ReaderFactory + 'static>(mut self, factory: R) -> Self {
        self.reader = Some(Arc::new(factory));
        self
    }

    /// Unique format id, the lookup key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name; may be empty.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Canonical extension, without separator.
    pub fn primary_extension(&self) -> &str {
        &self.primary_extension
    }

    /// Additional extensions. Never includes the primary extension.
    pub fn extension_aliases(&self) -> &[String] {
        &self.extension_aliases
    }

    /// Primary extension followed by the aliases, in declared order.
    ///
    /// No deduplication is performed.
    pub fn extensions(&self) -> Vec<String> {
        let mut ret = Vec::with_capacity(self.extension_aliases.len() + 1);
        ret.push(self.primary_extension.clone());
        ret.extend(self.extension_aliases.iter().cloned());
        ret
    }

    /// Check whether `ext` is one of this format's extensions.
    ///
    /// Comparison is ASCII case-insensitive and tolerates a leading `.`.
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        std::iter::once(&self.primary_extension)
            .chain(self.extension_aliases.iter())
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }

    /// Writer factory, if the format can be written.
    pub fn writer_factory(&self) -> Option<SharedWriterFactory> {
        self.writer.clone()
    }

    /// Reader factory, if the format can be read.
    pub fn reader_factory(&self) -> Option<SharedReaderFactory> {
        self.reader.clone()
    }

    /// Check whether a writer factory is present.
    pub fn supports_write(&self) -> bool {
        self.writer.is_some()
    }

    /// Check whether a reader factory is present.
    pub fn supports_read(&self) -> bool {
        self.reader.is_some()
    }
}

impl PartialEq for FormatDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FormatDescriptor {}

impl PartialOrd for FormatDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormatDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for FormatDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("primary_extension", &self.primary_extension)
            .field("extension_aliases", &self.extension_aliases)
            .field("writer", &self.writer.is_some())
            .field("reader", &self.reader.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_extensions_preserve_order() {
        let desc = FormatDescriptor::new("SL1", "sl1").with_aliases(["sl1s", "zip"]);
        assert_eq!(desc.extensions(), vec!["sl1", "sl1s", "zip"]);
        assert_eq!(desc.extension_aliases(), ["sl1s", "zip"]);
    }

    #[test]
    fn test_extensions_no_dedup() {
        let desc = FormatDescriptor::new("X", "x").with_aliases(["x", "y"]);
        assert_eq!(desc.extensions(), vec!["x", "x", "y"]);
    }

    #[test]
    fn test_identity_is_id_only() {
        let a = FormatDescriptor::new("SL1", "sl1").with_display_name("first");
        let b = FormatDescriptor::new("SL1", "zip").with_aliases(["other"]);
        let c = FormatDescriptor::new("SL2", "sl1");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_matches_extension() {
        let desc = FormatDescriptor::new("SL1", "sl1").with_aliases(["sl1s", "zip"]);
        assert!(desc.matches_extension("sl1"));
        assert!(desc.matches_extension(".ZIP"));
        assert!(desc.matches_extension("Sl1S"));
        assert!(!desc.matches_extension("pwmo"));
        assert!(!desc.matches_extension(""));
    }

    #[test]
    fn test_capabilities_default_absent() {
        let desc = FormatDescriptor::new("SL2", "sl1_svg");
        assert!(!desc.supports_write());
        assert!(!desc.supports_read());
        assert!(desc.writer_factory().is_none());
        assert!(desc.reader_factory().is_none());
        assert_eq!(desc.display_name(), "");
    }
}
