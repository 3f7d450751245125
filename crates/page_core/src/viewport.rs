/// An element's position relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Read-side access to the ambient viewport plus the one sanctioned write:
/// an animated scroll to an absolute offset. Animation duration and easing
/// are the platform's business.
pub trait Viewport: Send + Sync {
    /// Vertical distance between the viewport top and the document top.
    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// `None` when no live element carries `id` (e.g. mid route transition).
    fn element_bounds(&self, id: &str) -> Option<ElementBounds>;

    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior);

    /// Ask the host to deliver one [`crate::PageEvent::AnimationFrame`] at
    /// the next display refresh.
    fn request_animation_frame(&self);
}

/// Null viewport for hosts without scroll capability: reads are zero, writes
/// and frame requests are dropped, so the features that need them simply
/// never activate.
pub struct MissingViewport;

impl Viewport for MissingViewport {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn viewport_height(&self) -> f64 {
        0.0
    }

    fn element_bounds(&self, _id: &str) -> Option<ElementBounds> {
        None
    }

    fn scroll_to(&self, _offset: f64, _behavior: ScrollBehavior) {}

    fn request_animation_frame(&self) {}
}
