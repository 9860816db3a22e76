// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing with a max-wait ceiling.
//!
//! ## Usage
//!
//! 1) Call [`Debouncer::trigger`] every time the wrapped action is requested.
//! 2) Schedule a wake-up for [`Debouncer::deadline`].
//! 3) On wake-up, call [`Debouncer::poll`]; when it returns `true`, run the action.
//!
//! Calls that arrive within `delay` of each other coalesce into a single trailing
//! firing. If calls keep arriving, the burst still fires `max_wait` after its
//! first call, so continuous input produces periodic firings instead of none.
//!
//! When a timer wake-up and a new call share a timestamp, poll first and trigger
//! second. With that ordering a continuous stream fires exactly every `max_wait`.

/// Timing parameters for a [`Debouncer`], in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebounceConfig {
    /// Quiet period that must elapse after the last call before firing.
    pub delay: u64,
    /// Upper bound between the first call of a burst and its firing.
    ///
    /// `None` means a steady stream of calls may postpone firing forever.
    pub max_wait: Option<u64>,
}

impl DebounceConfig {
    /// Creates a configuration with the given quiet period and ceiling.
    #[must_use]
    pub const fn new(delay: u64, max_wait: Option<u64>) -> Self {
        Self { delay, max_wait }
    }

    /// Whether calls fire on the next poll without waiting at all.
    ///
    /// A zero `delay` or a zero `max_wait` disables coalescing.
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.delay == 0 || matches!(self.max_wait, Some(0))
    }
}

impl Default for DebounceConfig {
    /// 100 ms quiet period, 200 ms ceiling.
    fn default() -> Self {
        Self::new(100, Some(200))
    }
}

/// Host-polled debounce state for one wrapped action.
///
/// A `Debouncer` knows nothing about what it gates. Dropping it (or calling
/// [`Debouncer::cancel`]) discards a pending burst, so an owner that stops
/// caring about the action can never be fired at afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    config: DebounceConfig,
    /// Timestamp of the first call of the pending burst.
    first_call: Option<u64>,
    /// Timestamp of the most recent call of the pending burst.
    last_call: Option<u64>,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            first_call: None,
            last_call: None,
        }
    }

    /// Returns the configuration this debouncer was built with.
    #[must_use]
    pub const fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Records a call at `now`.
    ///
    /// The first call of a burst starts the max-wait window; every call restarts
    /// the quiet period.
    pub fn trigger(&mut self, now: u64) {
        if self.first_call.is_none() {
            self.first_call = Some(now);
        }
        self.last_call = Some(now);
    }

    /// Returns `true` while a burst is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.last_call.is_some()
    }

    /// Returns the timestamp at which the pending burst fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        let last = self.last_call?;
        if self.config.is_immediate() {
            return Some(last);
        }
        let quiet = last.saturating_add(self.config.delay);
        match (self.config.max_wait, self.first_call) {
            (Some(max_wait), Some(first)) => Some(quiet.min(first.saturating_add(max_wait))),
            _ => Some(quiet),
        }
    }

    /// Fires the pending burst if its deadline has been reached.
    ///
    /// Returns `true` exactly once per burst; the debouncer is idle afterwards.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline() {
            Some(deadline) if deadline <= now => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Discards the pending burst without firing.
    pub fn cancel(&mut self) {
        self.first_call = None;
        self.last_call = None;
    }
}
