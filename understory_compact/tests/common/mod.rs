// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted toolbar host shared by the integration tests.
//!
//! The toolbar lays out a fixed-width chrome area next to a content slot:
//! `slot = container - CHROME`. Its content is `natural` wide, or `compact` wide
//! while the host renders the compact presentation.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use understory_compact::{
    CompactConfig, CompactDetector, CompactHost, CompactTransition, DebounceConfig, Metrics,
    ObservationId, Region,
};

pub(crate) const CHROME: f64 = 200.0;

#[derive(Debug)]
pub(crate) struct Toolbar {
    pub(crate) container: f64,
    pub(crate) natural: f64,
    pub(crate) compact: f64,
    pub(crate) rendered_compact: bool,
    pub(crate) container_present: bool,
    pub(crate) target_present: bool,
    /// Live observations, in start order.
    pub(crate) live: Vec<(ObservationId, Region)>,
    /// Every observation ever started.
    pub(crate) started: Vec<(ObservationId, Region)>,
    /// Every observation ever stopped.
    pub(crate) stopped: Vec<ObservationId>,
    pub(crate) settle_requested: bool,
}

impl Toolbar {
    pub(crate) fn new(container: f64, natural: f64, compact: f64) -> Self {
        Self {
            container,
            natural,
            compact,
            rendered_compact: false,
            container_present: true,
            target_present: true,
            live: Vec::new(),
            started: Vec::new(),
            stopped: Vec::new(),
            settle_requested: false,
        }
    }

    pub(crate) fn slot(&self) -> f64 {
        (self.container - CHROME).max(0.0)
    }

    pub(crate) fn content(&self) -> f64 {
        if self.rendered_compact {
            self.compact
        } else {
            self.natural
        }
    }

    pub(crate) fn started_in(&self, region: Region) -> usize {
        self.started.iter().filter(|(_, r)| *r == region).count()
    }
}

impl CompactHost for Toolbar {
    type Observation = ObservationId;

    fn measure(&self, region: Region) -> Option<Metrics> {
        match region {
            Region::Container if self.container_present => {
                Some(Metrics::from_widths(self.container, self.container))
            }
            Region::Target if self.target_present => {
                // Content never scrolls narrower than its box.
                let slot = self.slot();
                Some(Metrics::from_widths(slot, self.content().max(slot)))
            }
            _ => None,
        }
    }

    fn observe(&mut self, region: Region, id: ObservationId) -> ObservationId {
        self.live.push((id, region));
        self.started.push((id, region));
        id
    }

    fn stop_observing(&mut self, observation: ObservationId) {
        self.live.retain(|(id, _)| *id != observation);
        self.stopped.push(observation);
    }

    fn request_layout_settled(&mut self) {
        self.settle_requested = true;
    }
}

/// Drives a detector and a toolbar on a shared millisecond clock.
#[derive(Debug)]
pub(crate) struct Harness {
    pub(crate) host: Toolbar,
    pub(crate) detector: CompactDetector<ObservationId>,
    pub(crate) now: u64,
    pub(crate) transitions: Vec<(u64, CompactTransition)>,
}

impl Harness {
    pub(crate) fn new(host: Toolbar, config: CompactConfig) -> Self {
        Self {
            host,
            detector: CompactDetector::new(config),
            now: 0,
            transitions: Vec::new(),
        }
    }

    pub(crate) fn with_debounce(host: Toolbar, delay: u64, max_wait: u64) -> Self {
        Self::new(
            host,
            CompactConfig::uniform(DebounceConfig::new(delay, Some(max_wait))),
        )
    }

    pub(crate) fn mount(&mut self) {
        self.detector.mount(&mut self.host, self.now).unwrap();
    }

    /// Delivers a size notification to whatever is observed right now.
    pub(crate) fn notify(&mut self) {
        let live: Vec<ObservationId> = self.host.live.iter().map(|(id, _)| *id).collect();
        for id in live {
            self.detector.on_resize(id, self.now);
        }
    }

    pub(crate) fn resize_container(&mut self, width: f64) {
        self.host.container = width;
        self.notify();
    }

    /// Advances one millisecond: due timers first, then the host re-renders.
    pub(crate) fn tick(&mut self) {
        self.now += 1;

        // The host applies last frame's flag and settles layout.
        if self.host.settle_requested {
            self.host.settle_requested = false;
            self.render();
            self.detector.layout_settled(&mut self.host, self.now);
        }

        if let Some(transition) = self.detector.poll(&mut self.host, self.now).unwrap() {
            self.transitions.push((self.now, transition));
        }

        if !self.host.settle_requested {
            self.render();
        }
    }

    pub(crate) fn run_for(&mut self, ms: u64) {
        for _ in 0..ms {
            self.tick();
        }
    }

    fn render(&mut self) {
        let compact = self.detector.is_compact();
        if compact != self.host.rendered_compact {
            self.host.rendered_compact = compact;
            // Re-rendering resizes the target's content.
            self.notify();
        }
    }
}
