//! Scroll-position tracking with animation-frame coalescing.
//!
//! Raw scroll events arrive at high, irregular frequency; the tracker folds
//! them into at most one published signal per display refresh. While a flush
//! is pending, later raw offsets overwrite the pending one (latest wins) and
//! no additional frame is requested.

use crate::SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// The published read-only signal consumers re-render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSignal {
    pub scrolled: bool,
    pub direction: ScrollDirection,
}

impl Default for ScrollSignal {
    fn default() -> Self {
        ScrollState::default().signal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub direction: ScrollDirection,
    pub last_offset: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scrolled: false,
            direction: ScrollDirection::Up,
            last_offset: 0.0,
        }
    }
}

impl ScrollState {
    /// Transition on a coalesced offset sample. A zero delta keeps the prior
    /// direction so equal offsets cannot make the direction oscillate.
    pub fn advance(&self, offset: f64) -> ScrollState {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else if offset < self.last_offset {
            ScrollDirection::Up
        } else {
            self.direction
        };
        ScrollState {
            scrolled: offset > SCROLL_THRESHOLD_PX,
            direction,
            last_offset: offset,
        }
    }

    pub fn signal(&self) -> ScrollSignal {
        ScrollSignal {
            scrolled: self.scrolled,
            direction: self.direction,
        }
    }
}

/// Whether the caller needs to schedule an animation frame for this tracker.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    Schedule,
    AlreadyScheduled,
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
    pending: Option<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw scroll offset. Returns [`FrameRequest::Schedule`] only
    /// for the first event of a frame interval; until [`flush`](Self::flush)
    /// runs, further offsets just replace the pending sample.
    pub fn record(&mut self, offset: f64) -> FrameRequest {
        let request = if self.pending.is_none() {
            FrameRequest::Schedule
        } else {
            FrameRequest::AlreadyScheduled
        };
        self.pending = Some(offset);
        request
    }

    /// Apply the pending offset on the animation frame. Returns the new
    /// signal only when it differs from the previously published one, so a
    /// flush that changes nothing costs consumers no re-render.
    pub fn flush(&mut self) -> Option<ScrollSignal> {
        let offset = self.pending.take()?;
        let previous = self.state.signal();
        self.state = self.state.advance(offset);
        let signal = self.state.signal();
        (signal != previous).then_some(signal)
    }

    pub fn signal(&self) -> ScrollSignal {
        self.state.signal()
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
