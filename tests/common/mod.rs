// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use slaformats::io::{PrintConfig, Progress, RasterLayer};

/// Minimal configuration accepted by every built-in writer.
pub fn minimal_config() -> PrintConfig {
    PrintConfig::new()
        .with("layer_height", 0.05)
        .with("exposure_time", 2.5)
}

/// Small deterministic layer stack.
pub fn sample_layers(count: usize) -> Vec<RasterLayer> {
    (0..count)
        .map(|i| RasterLayer::new(vec![i as u8; 8 + i]))
        .collect()
}

/// Progress callback that records every reported percentage.
pub fn recording_progress() -> (Progress, Arc<Mutex<Vec<u32>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let progress = Progress::new(move |pct| {
        sink.lock().unwrap().push(pct);
        true
    });
    (progress, seen)
}
