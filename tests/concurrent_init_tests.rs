// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! First access to the global catalog from many threads at once.
//!
//! Kept in its own test binary so nothing touches the catalog earlier.

use std::sync::{Arc, Barrier};
use std::thread;

use slaformats::registry;

#[test]
fn test_concurrent_first_access_sees_full_catalog() {
    let expected: Vec<String> = registry::builtin_catalog()
        .iter()
        .map(|d| d.id().to_string())
        .collect();

    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    assert!(registry::writer_factory_for("SL1").is_some());
                } else {
                    assert!(registry::reader_factory_for("SL2").is_none());
                }
                registry::enumerate_formats()
                    .iter()
                    .map(|d| d.id().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
