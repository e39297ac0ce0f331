// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Concrete archive formats wired into the built-in catalog.
//!
//! - [`sl1`] - SL1 archives (read and write)
//! - [`sl1_svg`] - SL1SVG archives (read and write) and SL2 (write only)
//! - [`anycubic`] - Anycubic Photon family (write only)

pub mod anycubic;
pub mod container;
pub mod sl1;
pub mod sl1_svg;

pub use anycubic::AnycubicFormat;
pub use container::{LayerArchiveReader, LayerArchiveWriter};
pub use sl1::Sl1Format;
pub use sl1_svg::Sl1SvgFormat;
