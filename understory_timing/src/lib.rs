// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! Nothing in this crate reads a clock or owns a thread. Every type takes the
//! current time as a millisecond timestamp and reports the next instant at which
//! it wants to be polled. Hosts map that onto whatever they already have: an
//! event-loop timer, `requestAnimationFrame`, a test script, and so on.
//!
//! - [`Debouncer`]: trailing-edge debouncing with an optional max-wait ceiling,
//!   configured by a [`DebounceConfig`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::{DebounceConfig, Debouncer};
//!
//! let mut debounce = Debouncer::new(DebounceConfig::new(20, Some(100)));
//!
//! // A burst of calls one millisecond apart.
//! for t in 0..5 {
//!     debounce.trigger(t);
//! }
//!
//! // Nothing fires until the burst has been quiet for `delay`.
//! assert!(!debounce.poll(10));
//! assert_eq!(debounce.deadline(), Some(24));
//! assert!(debounce.poll(24));
//! assert!(!debounce.is_pending());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`DebounceConfig`].
//!
//! This crate is `no_std` compatible.

#![no_std]

mod debounce;

pub use debounce::{DebounceConfig, Debouncer};
