// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Progress reporting for archive import.

use std::fmt;
use std::sync::Arc;

/// Progress callback handed to archive readers.
///
/// The callback receives a completion percentage in `0..=100` and returns
/// `false` to request cancellation. Readers call it zero or more times while
/// reading; the registry never calls it.
#[derive(Clone)]
pub struct Progress {
    callback: Option<Arc<dyn Fn(u32) -> bool + Send + Sync>>,
}

impl Progress {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(u32) -> bool + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// A progress sink that ignores every report and never cancels.
    pub fn none() -> Self {
        Self { callback: None }
    }

    /// Report progress, clamped to 100. Returns `false` if the caller asked
    /// to stop.
    pub fn report(&self, percent: u32) -> bool {
        match &self.callback {
            Some(callback) => callback(percent.min(100)),
            None => true,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
