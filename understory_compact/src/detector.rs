// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The compact-mode state machine.
//!
//! ## Phases
//!
//! ```text
//!   Idle --mount--> WatchingTarget --overflow--> WatchingContainer
//!                        ^                              |
//!                        |                        room regained
//!                        |                              v
//!                        +-------layout_settled------ Settling
//!
//!   any phase --unmount--> Detached
//! ```
//!
//! While watching the target, the detector compares the target's natural width
//! with the width it was given. Once content overflows, switching to compact mode
//! changes the target's own size, so the target can no longer tell us when it
//! would fit again. The detector instead records how wide the container was plus
//! how much width was missing, and waits for the container to grow past that.
//!
//! At most one size observation is active at a time. The previous observation
//! is always stopped before the next one starts, and its pending debounced
//! evaluation is dropped with it.

use core::cmp::Ordering;

use understory_timing::Debouncer;

use crate::{CompactConfig, CompactError, CompactHost, Metrics, ObservationId, Region};

/// Where a [`CompactDetector`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Constructed but not mounted yet.
    Idle,
    /// Observing the target for overflow. Not compact.
    WatchingTarget,
    /// Observing the container for regained room. Compact.
    WatchingContainer {
        /// The container must grow strictly wider than this to leave compact mode.
        min_container_width: f64,
    },
    /// Compact mode was just left; waiting for the host's layout to settle
    /// before watching the target again.
    Settling,
    /// Unmounted. No further transitions happen.
    Detached,
}

impl Phase {
    /// Returns the region observed in this phase, if any.
    #[must_use]
    pub const fn observed_region(&self) -> Option<Region> {
        match self {
            Self::WatchingTarget => Some(Region::Target),
            Self::WatchingContainer { .. } => Some(Region::Container),
            Self::Idle | Self::Settling | Self::Detached => None,
        }
    }
}

/// A flag change produced by [`CompactDetector::poll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompactTransition {
    /// Content overflowed; compact mode is now on.
    Entered {
        /// Container width that has to be exceeded to leave compact mode again.
        min_container_width: f64,
    },
    /// The container regained enough room; compact mode is now off.
    Exited,
}

#[derive(Debug)]
struct ActiveObservation<O> {
    id: ObservationId,
    region: Region,
    handle: O,
    debounce: Debouncer,
}

/// Decides when a target no longer fits its container and when it fits again.
///
/// `O` is the host's observation handle type, see [`CompactHost::Observation`].
///
/// The host drives the detector:
///
/// - [`mount`](Self::mount) once both elements exist,
/// - [`on_resize`](Self::on_resize) for every size notification,
/// - [`poll`](Self::poll) at [`next_deadline`](Self::next_deadline),
/// - [`layout_settled`](Self::layout_settled) when asked via
///   [`CompactHost::request_layout_settled`],
/// - [`unmount`](Self::unmount) before the elements go away.
#[derive(Debug)]
pub struct CompactDetector<O> {
    config: CompactConfig,
    phase: Phase,
    compact: bool,
    active: Option<ActiveObservation<O>>,
    next_id: u64,
}

impl<O> CompactDetector<O> {
    /// Creates an unmounted detector. Compact mode starts off.
    #[must_use]
    pub const fn new(config: CompactConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            compact: false,
            active: None,
            next_id: 0,
        }
    }

    /// Returns the configuration this detector was built with.
    #[must_use]
    pub const fn config(&self) -> CompactConfig {
        self.config
    }

    /// Whether the host should render its compact presentation.
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the recovery threshold while watching the container.
    #[must_use]
    pub const fn min_container_width(&self) -> Option<f64> {
        match self.phase {
            Phase::WatchingContainer {
                min_container_width,
            } => Some(min_container_width),
            _ => None,
        }
    }

    /// Returns the id of the live observation, if any.
    #[must_use]
    pub fn active_observation(&self) -> Option<ObservationId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Returns the region currently observed, if any.
    #[must_use]
    pub fn active_region(&self) -> Option<Region> {
        self.active.as_ref().map(|active| active.region)
    }

    /// Returns the timestamp at which [`poll`](Self::poll) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.active.as_ref()?.debounce.deadline()
    }

    /// Starts watching the target.
    ///
    /// Both regions must be measurable. The new observation counts as notified at
    /// `now`, so the first evaluation happens one debounce window later even if the
    /// host never reports a resize.
    pub fn mount<H>(&mut self, host: &mut H, now: u64) -> Result<(), CompactError>
    where
        H: CompactHost<Observation = O>,
    {
        match self.phase {
            Phase::Idle => {}
            Phase::Detached => return Err(CompactError::Detached),
            _ => return Err(CompactError::AlreadyMounted),
        }
        measure(host, Region::Container)?;
        measure(host, Region::Target)?;

        self.phase = Phase::WatchingTarget;
        self.start(host, Region::Target, now);
        Ok(())
    }

    /// Records a size notification for observation `id`.
    ///
    /// Returns `false` and does nothing if `id` is not the live observation.
    pub fn on_resize(&mut self, id: ObservationId, now: u64) -> bool {
        match self.active.as_mut() {
            Some(active) if active.id == id => {
                active.debounce.trigger(now);
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    id = id.get(),
                    "ignoring notification for stopped observation"
                );
                false
            }
        }
    }

    /// Runs the debounced evaluation if it is due at `now`.
    ///
    /// On error the pending evaluation is consumed but the live observation is
    /// left in place, so the next notification evaluates again.
    pub fn poll<H>(
        &mut self,
        host: &mut H,
        now: u64,
    ) -> Result<Option<CompactTransition>, CompactError>
    where
        H: CompactHost<Observation = O>,
    {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        if !active.debounce.poll(now) {
            return Ok(None);
        }
        match self.phase {
            Phase::WatchingTarget => self.evaluate_target(host, now),
            Phase::WatchingContainer {
                min_container_width,
            } => self.evaluate_container(host, min_container_width),
            Phase::Idle | Phase::Settling | Phase::Detached => Ok(None),
        }
    }

    /// Resumes watching the target after compact mode was left.
    ///
    /// Returns `true` if a fresh target observation was started. Calls in any
    /// phase other than [`Phase::Settling`] are ignored.
    pub fn layout_settled<H>(&mut self, host: &mut H, now: u64) -> bool
    where
        H: CompactHost<Observation = O>,
    {
        if self.phase != Phase::Settling {
            return false;
        }
        self.phase = Phase::WatchingTarget;
        self.start(host, Region::Target, now);
        true
    }

    /// Stops the live observation and detaches the detector for good.
    ///
    /// The compact flag keeps its last value.
    pub fn unmount<H>(&mut self, host: &mut H)
    where
        H: CompactHost<Observation = O>,
    {
        self.stop(host);
        self.phase = Phase::Detached;
        #[cfg(feature = "tracing")]
        tracing::debug!(compact = self.compact, "compact detector unmounted");
    }

    fn evaluate_target<H>(
        &mut self,
        host: &mut H,
        now: u64,
    ) -> Result<Option<CompactTransition>, CompactError>
    where
        H: CompactHost<Observation = O>,
    {
        let target = measure(host, Region::Target)?;
        if !target.overflows() {
            return Ok(None);
        }
        // Measured before stopping so a missing container leaves the target
        // observation running.
        let container = measure(host, Region::Container)?;

        self.stop(host);
        self.compact = true;
        let min_container_width = container.client.width + target.overflow_width();
        self.phase = Phase::WatchingContainer {
            min_container_width,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            missing = target.overflow_width(),
            min_container_width,
            "target overflows, entering compact mode"
        );
        self.start(host, Region::Container, now);
        Ok(Some(CompactTransition::Entered {
            min_container_width,
        }))
    }

    fn evaluate_container<H>(
        &mut self,
        host: &mut H,
        min_container_width: f64,
    ) -> Result<Option<CompactTransition>, CompactError>
    where
        H: CompactHost<Observation = O>,
    {
        let container = measure(host, Region::Container)?;
        if container.client.width.partial_cmp(&min_container_width) != Some(Ordering::Greater) {
            return Ok(None);
        }

        self.stop(host);
        self.compact = false;
        self.phase = Phase::Settling;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = container.client.width,
            min_container_width,
            "container regained room, leaving compact mode"
        );
        host.request_layout_settled();
        Ok(Some(CompactTransition::Exited))
    }

    fn start<H>(&mut self, host: &mut H, region: Region, now: u64)
    where
        H: CompactHost<Observation = O>,
    {
        debug_assert!(
            self.active.is_none(),
            "starting an observation while another one is live"
        );
        let id = ObservationId(self.next_id);
        self.next_id += 1;

        let handle = host.observe(region, id);
        let mut debounce = Debouncer::new(self.config.debounce_for(region));
        debounce.trigger(now);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.get(), %region, "observation started");

        self.active = Some(ActiveObservation {
            id,
            region,
            handle,
            debounce,
        });
    }

    fn stop<H>(&mut self, host: &mut H)
    where
        H: CompactHost<Observation = O>,
    {
        if let Some(active) = self.active.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!(id = active.id.get(), region = %active.region, "observation stopped");
            host.stop_observing(active.handle);
        }
    }
}

fn measure<H: CompactHost>(host: &H, region: Region) -> Result<Metrics, CompactError> {
    host.measure(region).ok_or(CompactError::MissingElement(region))
}
