//! One-shot entrance-reveal tracking driven by viewport intersection.

use std::collections::HashSet;

use shared::domain::SectionId;
use thiserror::Error;

use crate::{viewport::ElementBounds, BOTTOM_INSET_PX, VISIBILITY_RATIO};

/// One intersection report for a tracked element: where it sits relative to
/// the viewport and how tall the viewport currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub id: SectionId,
    pub bounds: ElementBounds,
    pub viewport_height: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObserveError {
    #[error("intersection observation is not supported by this host")]
    Unsupported,
}

/// Host-side registration of elements for intersection reports.
pub trait SectionObserver: Send + Sync {
    fn observe(&self, id: SectionId) -> Result<(), ObserveError>;
    fn unobserve(&self, id: SectionId);
}

/// Null observer for hosts without the capability; every registration fails,
/// which callers translate into the reveal-everything fallback.
pub struct MissingSectionObserver;

impl SectionObserver for MissingSectionObserver {
    fn observe(&self, _id: SectionId) -> Result<(), ObserveError> {
        Err(ObserveError::Unsupported)
    }

    fn unobserve(&self, _id: SectionId) {}
}

/// Fraction of the element inside the trigger zone. The zone is the viewport
/// inset [`BOTTOM_INSET_PX`] from its bottom edge, so reveals fire slightly
/// before the element is fully on-screen. Zero-height elements count as
/// fully outside.
pub fn intersection_ratio(bounds: ElementBounds, viewport_height: f64) -> f64 {
    if bounds.height <= 0.0 {
        return 0.0;
    }
    let zone_bottom = viewport_height - BOTTOM_INSET_PX;
    let visible_top = bounds.top.max(0.0);
    let visible_bottom = (bounds.top + bounds.height).min(zone_bottom);
    (visible_bottom - visible_top).max(0.0) / bounds.height
}

/// Append-only set of revealed sections. Per tracked element the state
/// machine is `Unseen -> Visible` with `Visible` terminal: an element that
/// later scrolls out of view stays revealed for the rest of the mount.
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    observing: HashSet<SectionId>,
    visible: HashSet<SectionId>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: SectionId) {
        if !self.visible.contains(&id) {
            self.observing.insert(id);
        }
    }

    /// Marks every given section visible immediately. Fallback for hosts
    /// where intersection observation is unavailable: content must never
    /// stay hidden forever, only the entrance animation is lost.
    pub fn reveal_all(&mut self, ids: impl IntoIterator<Item = SectionId>) {
        for id in ids {
            self.observing.remove(&id);
            self.visible.insert(id);
        }
    }

    /// Feed one intersection report. Returns the id on the `Unseen ->
    /// Visible` edge only; anything else (untracked id, ratio below
    /// threshold, already-visible element) is `None`. A revealed element is
    /// dropped from the observation set, so later disqualifying reports
    /// cannot un-reveal it.
    pub fn sample(&mut self, sample: IntersectionSample) -> Option<SectionId> {
        if !self.observing.contains(&sample.id) {
            return None;
        }
        if intersection_ratio(sample.bounds, sample.viewport_height) < VISIBILITY_RATIO {
            return None;
        }
        self.observing.remove(&sample.id);
        self.visible.insert(sample.id);
        Some(sample.id)
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.visible.contains(&id)
    }

    /// Sections still awaiting their first qualifying intersection.
    pub fn still_observing(&self) -> Vec<SectionId> {
        self.observing.iter().copied().collect()
    }

    /// Cancels all outstanding observations (unmount path). Revealed state
    /// dies with the tracker itself.
    pub fn cancel_observations(&mut self) {
        self.observing.clear();
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
