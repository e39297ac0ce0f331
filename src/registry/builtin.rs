// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The compiled-in list of archive formats.
//!
//! New formats are added by extending [`builtin_formats`]; there is no
//! runtime registration.

use crate::formats::sl1::SL1_ID;
use crate::formats::sl1_svg::{SL1SVG_ID, SL2_ID};
use crate::formats::{AnycubicFormat, Sl1Format, Sl1SvgFormat};

use super::catalog::Catalog;
use super::descriptor::FormatDescriptor;

/// Descriptor for one machine of the Anycubic Photon family.
///
/// The id and the primary extension are both `ext`; the family is
/// write-only.
pub fn anycubic_format(ext: &str, machine_name: &str) -> FormatDescriptor {
    FormatDescriptor::new(ext, ext)
        .with_display_name(machine_name)
        .with_writer(AnycubicFormat::new(ext, machine_name))
}

/// Every built-in format, in declaration order.
pub fn builtin_formats() -> Vec<FormatDescriptor> {
    vec![
        FormatDescriptor::new(SL1_ID, "sl1")
            .with_display_name("SL1 archive format")
            .with_aliases(["sl1s", "zip"])
            .with_writer(Sl1Format)
            .with_reader(Sl1Format),
        FormatDescriptor::new(SL1SVG_ID, "sl1_svg")
            .with_display_name("SL1SVG archive files")
            .with_writer(Sl1SvgFormat::sl1svg())
            .with_reader(Sl1SvgFormat::sl1svg()),
        FormatDescriptor::new(SL2_ID, "sl1_svg").with_writer(Sl1SvgFormat::sl2()),
        anycubic_format("pwmo", "Photon Mono"),
        anycubic_format("pwmx", "Photon Mono X"),
        anycubic_format("pwms", "Photon Mono SE"),
    ]
}

/// Build the catalog of built-in formats.
pub fn builtin_catalog() -> Catalog {
    Catalog::from_descriptors(builtin_formats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        assert_eq!(builtin_catalog().len(), builtin_formats().len());
    }

    #[test]
    fn test_every_builtin_is_writable() {
        assert!(builtin_formats().iter().all(FormatDescriptor::supports_write));
    }

    #[test]
    fn test_anycubic_descriptor() {
        let desc = anycubic_format("pwms", "Photon Mono SE");
        assert_eq!(desc.id(), "pwms");
        assert_eq!(desc.primary_extension(), "pwms");
        assert_eq!(desc.display_name(), "Photon Mono SE");
        assert!(desc.extension_aliases().is_empty());
        assert!(!desc.supports_read());
    }
}
