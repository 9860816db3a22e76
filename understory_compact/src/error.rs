// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Region;

/// Contract violations reported by a [`CompactDetector`](crate::CompactDetector).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompactError {
    /// The host could not measure a region it was expected to have mounted.
    MissingElement(Region),
    /// `mount` was called on a detector that is already running.
    AlreadyMounted,
    /// The detector was unmounted and cannot be started again.
    Detached,
}

impl fmt::Display for CompactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(region) => {
                write!(f, "the {region} element is not available for measurement")
            }
            Self::AlreadyMounted => f.write_str("compact detector is already mounted"),
            Self::Detached => f.write_str("compact detector was unmounted"),
        }
    }
}

impl core::error::Error for CompactError {}
