//! Scroll tracking, smooth navigation, and one-shot visibility reveal for the
//! portfolio page.
//!
//! Everything in this crate is host-agnostic: the ambient viewport is behind
//! the [`Viewport`] trait, intersection observation behind [`SectionObserver`],
//! and client-side persistence behind [`PreferenceStore`]. The host event loop
//! feeds events in through [`PageController::dispatch`] and reads signals back
//! out; all state transitions are synchronous and nothing blocks.

pub mod cookie;
pub mod navigate;
pub mod page;
pub mod prefs;
pub mod scroll;
pub mod theme;
pub mod viewport;
pub mod visibility;

pub use cookie::CookieNotice;
pub use navigate::SmoothNavigator;
pub use page::{HeaderStyle, PageController, PageEvent, PageSubscription, PageUpdate};
pub use prefs::{MissingPreferenceStore, PreferenceStore};
pub use scroll::{FrameRequest, ScrollDirection, ScrollSignal, ScrollState, ScrollTracker};
pub use theme::{ResolvedTheme, ThemeController, ThemePreference};
pub use viewport::{ElementBounds, MissingViewport, ScrollBehavior, Viewport};
pub use visibility::{
    IntersectionSample, MissingSectionObserver, ObserveError, SectionObserver, VisibilityTracker,
};

/// Offset beyond which the page counts as scrolled (header elevation).
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Height of the fixed header; navigation lands targets just below it.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Fraction of an element that must be inside the trigger zone to reveal it.
pub const VISIBILITY_RATIO: f64 = 0.1;
/// The trigger zone stops this far above the viewport's bottom edge.
pub const BOTTOM_INSET_PX: f64 = 50.0;
