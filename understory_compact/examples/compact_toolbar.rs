// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact toolbar.
//!
//! Drive a `CompactDetector` over a simulated toolbar while its window is dragged
//! narrower and then wider again.
//!
//! Run:
//! - `cargo run -p understory_compact --example compact_toolbar`

use understory_compact::{
    CompactConfig, CompactDetector, CompactHost, DebounceConfig, Metrics, ObservationId, Region,
};

/// Width taken by the toolbar's logo and menu button.
const CHROME: f64 = 180.0;

struct Toolbar {
    window: f64,
    compact: bool,
    live: Option<ObservationId>,
    settle: bool,
}

impl Toolbar {
    /// Labels when roomy, icons when compact.
    fn content(&self) -> f64 {
        if self.compact { 96.0 } else { 320.0 }
    }
}

impl CompactHost for Toolbar {
    type Observation = ObservationId;

    fn measure(&self, region: Region) -> Option<Metrics> {
        Some(match region {
            Region::Container => Metrics::from_widths(self.window, self.window),
            Region::Target => {
                let slot = (self.window - CHROME).max(0.0);
                Metrics::from_widths(slot, self.content().max(slot))
            }
        })
    }

    fn observe(&mut self, region: Region, id: ObservationId) -> ObservationId {
        println!("    observe {region} as #{}", id.get());
        self.live = Some(id);
        id
    }

    fn stop_observing(&mut self, observation: ObservationId) {
        println!("    stop #{}", observation.get());
        self.live = None;
    }

    fn request_layout_settled(&mut self) {
        self.settle = true;
    }
}

fn main() {
    let mut toolbar = Toolbar {
        window: 640.0,
        compact: false,
        live: None,
        settle: false,
    };
    let config = CompactConfig::uniform(DebounceConfig::new(16, Some(64)));
    let mut detector = CompactDetector::new(config);

    detector.mount(&mut toolbar, 0).expect("toolbar elements are mounted");

    // Drag the window down to 420px and back up to 700px, one pixel per millisecond.
    let drag = (0..220)
        .map(|i| 640.0 - f64::from(i))
        .chain((0..280).map(|i| 420.0 + f64::from(i)));
    let hold = std::iter::repeat_n(700.0, 100);
    for (now, width) in (1..).zip(drag.chain(hold)) {
        if toolbar.settle {
            toolbar.settle = false;
            toolbar.compact = detector.is_compact();
            detector.layout_settled(&mut toolbar, now);
        }

        match detector.poll(&mut toolbar, now) {
            Ok(Some(transition)) => {
                println!("{now:>4}ms window={width:.0}px {transition:?}");
            }
            Ok(None) => {}
            Err(err) => {
                eprintln!("{now:>4}ms {err}");
                break;
            }
        }
        if !toolbar.settle {
            toolbar.compact = detector.is_compact();
        }

        if width != toolbar.window {
            toolbar.window = width;
            if let Some(id) = toolbar.live {
                detector.on_resize(id, now);
            }
        }
    }

    detector.unmount(&mut toolbar);
    println!("final: compact={}", detector.is_compact());
}
