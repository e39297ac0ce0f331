// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O boundary shared with archive readers and writers.
//!
//! This module provides the types handed across the factory interface and
//! the traits every concrete format implements.

pub mod config;
pub mod detection;
pub mod metadata;
pub mod progress;
pub mod traits;

// Re-exports
pub use config::PrintConfig;
pub use detection::{detect_formats, detect_readable_format};
pub use metadata::{ImportedArchive, RasterLayer};
pub use progress::Progress;
pub use traits::{ArchiveReader, ArchiveWriter};
