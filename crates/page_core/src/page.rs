//! The page controller: binds the scroll tracker, navigator, and visibility
//! tracker to a host viewport, and owns the navigation-shell state (header
//! style, mobile menu).

use std::sync::{Arc, Mutex};

use shared::domain::SectionId;
use tracing::{debug, warn};

use crate::{
    navigate::SmoothNavigator,
    scroll::{FrameRequest, ScrollSignal, ScrollTracker},
    viewport::Viewport,
    visibility::{IntersectionSample, SectionObserver, VisibilityTracker},
};

/// Host-delivered input events, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Raw scroll event with the current offset. High frequency; coalesced.
    Scroll { offset: f64 },
    /// One display-refresh tick, previously requested through the viewport.
    AnimationFrame,
    /// Intersection report for an observed section.
    Intersection(IntersectionSample),
}

/// State changes produced by a dispatch, in the order they were applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageUpdate {
    ScrollChanged(ScrollSignal),
    SectionRevealed(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Elevated (opaque, bordered) once scrolled past the threshold.
    pub elevated: bool,
}

struct PageState {
    mounted: bool,
    scroll: ScrollTracker,
    visibility: VisibilityTracker,
    menu_open: bool,
}

pub struct PageController {
    viewport: Arc<dyn Viewport>,
    observer: Arc<dyn SectionObserver>,
    navigator: SmoothNavigator,
    inner: Mutex<PageState>,
}

impl PageController {
    /// Mounts the page: acquires the scroll listener state and registers
    /// every animated section with the host observer. The returned
    /// [`PageSubscription`] is the scoped handle for all of it; dropping the
    /// subscription releases everything on every exit path.
    ///
    /// When the host cannot observe intersections at all, animated sections
    /// are revealed immediately instead of staying hidden forever.
    pub fn mount(
        viewport: Arc<dyn Viewport>,
        observer: Arc<dyn SectionObserver>,
    ) -> (Arc<PageController>, PageSubscription) {
        let mut visibility = VisibilityTracker::new();
        let mut registered = Vec::new();
        let mut unsupported = false;
        for id in SectionId::ANIMATED {
            match observer.observe(id) {
                Ok(()) => {
                    visibility.observe(id);
                    registered.push(id);
                }
                Err(error) => {
                    warn!(%error, "section observation unavailable; revealing all sections");
                    unsupported = true;
                    break;
                }
            }
        }
        if unsupported {
            for id in registered {
                observer.unobserve(id);
            }
            visibility.cancel_observations();
            visibility.reveal_all(SectionId::ANIMATED);
        }

        let controller = Arc::new(PageController {
            navigator: SmoothNavigator::new(Arc::clone(&viewport)),
            viewport,
            observer,
            inner: Mutex::new(PageState {
                mounted: true,
                scroll: ScrollTracker::new(),
                visibility,
                menu_open: false,
            }),
        });
        let subscription = PageSubscription {
            controller: Arc::clone(&controller),
        };
        (controller, subscription)
    }

    /// The single synchronous update path. Events arriving after unmount are
    /// inert: no state change, no panic.
    pub fn dispatch(&self, event: PageEvent) -> Vec<PageUpdate> {
        let Ok(mut state) = self.inner.lock() else {
            return Vec::new();
        };
        if !state.mounted {
            return Vec::new();
        }
        match event {
            PageEvent::Scroll { offset } => {
                if state.scroll.record(offset) == FrameRequest::Schedule {
                    self.viewport.request_animation_frame();
                }
                Vec::new()
            }
            PageEvent::AnimationFrame => state
                .scroll
                .flush()
                .map(PageUpdate::ScrollChanged)
                .into_iter()
                .collect(),
            PageEvent::Intersection(sample) => match state.visibility.sample(sample) {
                Some(id) => {
                    self.observer.unobserve(id);
                    vec![PageUpdate::SectionRevealed(id)]
                }
                None => Vec::new(),
            },
        }
    }

    pub fn scroll_signal(&self) -> ScrollSignal {
        self.inner
            .lock()
            .map(|state| state.scroll.signal())
            .unwrap_or_default()
    }

    pub fn header_style(&self) -> HeaderStyle {
        HeaderStyle {
            elevated: self.scroll_signal().scrolled,
        }
    }

    pub fn is_section_visible(&self, id: SectionId) -> bool {
        self.inner
            .lock()
            .map(|state| state.visibility.is_visible(id))
            .unwrap_or(false)
    }

    /// Navigation-shell link activation: resolves an `#about`-style anchor,
    /// smooth-scrolls there, and closes the mobile menu. Unknown anchors and
    /// unmounted pages are no-ops.
    pub fn navigate(&self, anchor: &str) {
        if !self.mounted() {
            return;
        }
        let Some(id) = SectionId::from_anchor(anchor) else {
            debug!(anchor, "unknown navigation anchor; ignoring");
            return;
        };
        self.navigator.scroll_to_section(id);
        self.close_menu();
    }

    pub fn scroll_to_top(&self) {
        if !self.mounted() {
            return;
        }
        self.navigator.scroll_to_top();
    }

    pub fn menu_open(&self) -> bool {
        self.inner
            .lock()
            .map(|state| state.menu_open)
            .unwrap_or(false)
    }

    pub fn toggle_menu(&self) -> bool {
        let Ok(mut state) = self.inner.lock() else {
            return false;
        };
        if !state.mounted {
            return false;
        }
        state.menu_open = !state.menu_open;
        state.menu_open
    }

    pub fn close_menu(&self) {
        if let Ok(mut state) = self.inner.lock() {
            state.menu_open = false;
        }
    }

    fn mounted(&self) -> bool {
        self.inner
            .lock()
            .map(|state| state.mounted)
            .unwrap_or(false)
    }

    fn unmount(&self) {
        let Ok(mut state) = self.inner.lock() else {
            return;
        };
        if !state.mounted {
            return;
        }
        state.mounted = false;
        for id in state.visibility.still_observing() {
            self.observer.unobserve(id);
        }
        state.visibility.cancel_observations();
        state.scroll = ScrollTracker::new();
        state.menu_open = false;
        debug!("page subscriptions released");
    }
}

/// Scoped handle for everything [`PageController::mount`] acquired. Dropping
/// it synchronously detaches all listeners and observations; events that
/// arrive afterwards hit a disposed-but-inert controller.
pub struct PageSubscription {
    controller: Arc<PageController>,
}

impl PageSubscription {
    /// Explicit teardown; equivalent to dropping the handle.
    pub fn unmount(self) {}
}

impl Drop for PageSubscription {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
