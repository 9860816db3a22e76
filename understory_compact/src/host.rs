// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the detector and the host's layout engine.

use core::fmt;

use kurbo::Size;

/// Which of the two host elements an observation or measurement refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The outer element whose width the host's layout hands out.
    Container,
    /// The content element that may overflow the box it is given.
    Target,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("container"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// One measurement of a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// The box the layout actually allots to the element.
    pub client: Size,
    /// The natural size of the element's content.
    pub scroll: Size,
}

impl Metrics {
    /// Creates a measurement from the allotted and natural sizes.
    #[must_use]
    pub const fn new(client: Size, scroll: Size) -> Self {
        Self { client, scroll }
    }

    /// Creates a measurement that only carries widths.
    #[must_use]
    pub const fn from_widths(client_width: f64, scroll_width: f64) -> Self {
        Self {
            client: Size::new(client_width, 0.0),
            scroll: Size::new(scroll_width, 0.0),
        }
    }

    /// Returns `true` if the content is wider than its box.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.scroll.width > self.client.width
    }

    /// How much wider the content is than its box.
    ///
    /// Negative when the content leaves room to spare.
    #[must_use]
    pub fn overflow_width(&self) -> f64 {
        self.scroll.width - self.client.width
    }
}

/// Identifies one size observation started by a detector.
///
/// Ids are never reused by the detector that issued them, so a notification that
/// carries an old id can always be told apart from one for the live observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(pub(crate) u64);

impl ObservationId {
    /// Returns the raw id, for hosts that key their own tables by it.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host services a [`CompactDetector`](crate::CompactDetector) relies on.
///
/// The detector never holds on to the host; every operation that needs it takes
/// `&mut H` for the duration of the call.
pub trait CompactHost {
    /// Whatever the host needs to later stop an observation.
    type Observation;

    /// Measures a region, or returns `None` while its element is absent.
    fn measure(&self, region: Region) -> Option<Metrics>;

    /// Starts delivering size changes of `region`.
    ///
    /// Each change should reach the detector as
    /// [`CompactDetector::on_resize`](crate::CompactDetector::on_resize) with `id`.
    fn observe(&mut self, region: Region, id: ObservationId) -> Self::Observation;

    /// Stops an observation previously returned by [`CompactHost::observe`].
    fn stop_observing(&mut self, observation: Self::Observation);

    /// Asks for a call to
    /// [`CompactDetector::layout_settled`](crate::CompactDetector::layout_settled)
    /// once the host has applied the latest flag change to its layout.
    fn request_layout_settled(&mut self);
}
