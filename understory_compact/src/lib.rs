// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_compact --heading-base-level=0

//! Understory Compact: headless compact-mode detection for UI.
//!
//! A toolbar, a tab strip, or a row of buttons often has two presentations: the
//! natural one, and a compact one for when the natural one does not fit. Deciding
//! *when* to switch is harder than it looks, because switching changes the very
//! layout being measured. Naively re-measuring after every switch toggles back and
//! forth forever.
//!
//! [`CompactDetector`] solves this with hysteresis over two host regions:
//!
//! - While not compact, it watches the **target** (the content) and switches on as
//!   soon as the content is wider than the box it was given.
//! - At that moment it records `container width + missing width` as a threshold,
//!   then watches the **container** and switches off only once the container is
//!   strictly wider than that threshold.
//!
//! Exactly one region is observed at a time, and every evaluation is debounced
//! with an [`understory_timing::Debouncer`] so resize bursts collapse into a
//! single measurement.
//!
//! The crate does not know about any UI framework. Hosts implement
//! [`CompactHost`] to measure regions and to start/stop size observations, feed
//! size notifications back with [`CompactDetector::on_resize`], and call
//! [`CompactDetector::poll`] when [`CompactDetector::next_deadline`] is reached.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_compact::{
//!     CompactConfig, CompactDetector, CompactHost, CompactTransition, Metrics, ObservationId,
//!     Region,
//! };
//!
//! struct Toolbar {
//!     container: f64,
//!     content: f64,
//!     slot: f64,
//! }
//!
//! impl CompactHost for Toolbar {
//!     type Observation = ObservationId;
//!
//!     fn measure(&self, region: Region) -> Option<Metrics> {
//!         Some(match region {
//!             Region::Container => Metrics::from_widths(self.container, self.container),
//!             Region::Target => Metrics::from_widths(self.slot, self.content),
//!         })
//!     }
//!     fn observe(&mut self, _region: Region, id: ObservationId) -> ObservationId { id }
//!     fn stop_observing(&mut self, _observation: ObservationId) {}
//!     fn request_layout_settled(&mut self) {}
//! }
//!
//! let mut toolbar = Toolbar { container: 400.0, content: 260.0, slot: 200.0 };
//! let mut detector = CompactDetector::new(CompactConfig::default());
//!
//! detector.mount(&mut toolbar, 0).unwrap();
//! let due = detector.next_deadline().unwrap();
//! let transition = detector.poll(&mut toolbar, due).unwrap();
//!
//! assert_eq!(transition, Some(CompactTransition::Entered { min_container_width: 460.0 }));
//! assert!(detector.is_compact());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`CompactConfig`].
//! - `tracing`: emit `tracing` events for observation starts/stops and phase changes.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod config;
mod detector;
mod error;
mod host;

pub use config::CompactConfig;
pub use detector::{CompactDetector, CompactTransition, Phase};
pub use error::CompactError;
pub use host::{CompactHost, Metrics, ObservationId, Region};

pub use understory_timing::DebounceConfig;
