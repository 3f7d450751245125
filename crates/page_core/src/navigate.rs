use std::sync::Arc;

use shared::domain::SectionId;
use tracing::debug;

use crate::{
    viewport::{ScrollBehavior, Viewport},
    HEADER_OFFSET_PX,
};

/// Imperative smooth scrolling to named sections. Stateless between calls;
/// the target offset is recomputed from live geometry every time.
pub struct SmoothNavigator {
    viewport: Arc<dyn Viewport>,
}

impl SmoothNavigator {
    pub fn new(viewport: Arc<dyn Viewport>) -> Self {
        Self { viewport }
    }

    /// Scrolls so the section's top lands just below the fixed header.
    /// A section with no live element is a silent no-op: targets may not
    /// exist yet during fast route transitions.
    pub fn scroll_to_section(&self, id: SectionId) {
        let Some(bounds) = self.viewport.element_bounds(id.as_str()) else {
            debug!(section = %id, "navigation target not mounted; ignoring");
            return;
        };
        let target = bounds.top + self.viewport.scroll_offset() - HEADER_OFFSET_PX;
        self.viewport.scroll_to(target, ScrollBehavior::Smooth);
    }

    pub fn scroll_to_top(&self) {
        self.viewport.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
#[path = "tests/navigate_tests.rs"]
mod tests;
