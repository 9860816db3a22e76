// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detector configuration.

use understory_timing::DebounceConfig;

use crate::Region;

/// Debounce windows for the two watching phases of a
/// [`CompactDetector`](crate::CompactDetector).
///
/// The values are read once per observation; changing them requires a new
/// detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompactConfig {
    /// Debounce applied while waiting for the target to overflow.
    pub watch_target: DebounceConfig,
    /// Debounce applied while waiting for the container to regain room.
    pub watch_container: DebounceConfig,
}

impl CompactConfig {
    /// Creates a configuration with separate windows per phase.
    #[must_use]
    pub const fn new(watch_target: DebounceConfig, watch_container: DebounceConfig) -> Self {
        Self {
            watch_target,
            watch_container,
        }
    }

    /// Uses the same window for both phases.
    #[must_use]
    pub const fn uniform(debounce: DebounceConfig) -> Self {
        Self::new(debounce, debounce)
    }

    /// Returns the window used while observing `region`.
    #[must_use]
    pub const fn debounce_for(&self, region: Region) -> DebounceConfig {
        match region {
            Region::Target => self.watch_target,
            Region::Container => self.watch_container,
        }
    }
}
