// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format detection from file extensions.
//!
//! Maps a file name back to the registered formats that claim its
//! extension. Several formats may share an extension (SL1SVG and SL2 both
//! use `sl1_svg`), so every match is returned.
//!
//! # Example
//!
//! ```rust
//! use slaformats::io::detection::detect_formats;
//!
//! let formats = detect_formats("print.sl1s");
//! assert_eq!(formats[0].id(), "SL1");
//! ```

use std::path::Path;

use crate::registry::{self, FormatDescriptor};

/// Extension of `path` without the leading dot, if it has one.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// All registered formats whose extensions match `path`, ordered by id.
///
/// Returns an empty list when the path has no extension or no format
/// claims it.
pub fn detect_formats<P: AsRef<Path>>(path: P) -> Vec<FormatDescriptor> {
    match file_extension(path.as_ref()) {
        Some(ext) => registry::formats_for_extension(ext),
        None => Vec::new(),
    }
}

/// First registered format able to read `path`.
pub fn detect_readable_format<P: AsRef<Path>>(path: P) -> Option<FormatDescriptor> {
    detect_formats(path)
        .into_iter()
        .find(FormatDescriptor::supports_read)
}
