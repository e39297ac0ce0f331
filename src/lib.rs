// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # slaformats
//!
//! Registry of SLA print archive formats.
//!
//! Export and import pipelines pick a format by its short id and obtain
//! factories for a writer or reader, without linking against the concrete
//! format:
//! - [`registry`] - format descriptors, the built-in catalog and lookups
//! - [`io`] - configuration, progress, layers and the reader/writer traits
//! - [`formats`] - the concrete SL1, SL1SVG/SL2 and Anycubic formats
//!
//! ## Example: Exporting
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use slaformats::io::{PrintConfig, RasterLayer};
//! use slaformats::registry;
//!
//! let factory = registry::writer_factory_for("SL1").ok_or("SL1 not registered")?;
//! let mut writer = factory.build_writer(&PrintConfig::new());
//! writer.add_layer(RasterLayer::new(vec![0u8; 16]));
//! writer.export("print.sl1".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Importing
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use slaformats::io::{detect_readable_format, Progress};
//! use slaformats::{registry, ImportQuality};
//!
//! let format = detect_readable_format("print.sl1").ok_or("unknown file type")?;
//! let factory = registry::reader_factory_for(format.id()).ok_or("not readable")?;
//! let mut reader = factory.build_reader(
//!     "print.sl1".as_ref(),
//!     ImportQuality::Balanced,
//!     Progress::new(|pct| {
//!         println!("{pct}%");
//!         true
//!     }),
//! );
//! let imported = reader.read()?;
//! println!("{} layers", imported.layer_count());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{ArchiveError, ImportQuality, Result};

// I/O boundary types (configuration, progress, reader/writer traits)
pub mod io;

// Format registry
pub mod registry;

// Concrete archive formats
pub mod formats;

pub use registry::{
    enumerate_formats, extensions_for, find_format, reader_factory_for, writer_factory_for,
    FormatDescriptor,
};
