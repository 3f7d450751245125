use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use shared::domain::SectionId;

use super::*;
use crate::viewport::{ElementBounds, ScrollBehavior, Viewport};

#[derive(Default)]
struct TestViewport {
    offset: Mutex<f64>,
    elements: Mutex<HashMap<String, ElementBounds>>,
    scroll_calls: Mutex<Vec<(f64, ScrollBehavior)>>,
}

impl TestViewport {
    fn with_element(self, id: &str, bounds: ElementBounds) -> Self {
        self.elements
            .lock()
            .expect("elements")
            .insert(id.to_string(), bounds);
        self
    }

    fn set_offset(&self, offset: f64) {
        *self.offset.lock().expect("offset") = offset;
    }

    fn calls(&self) -> Vec<(f64, ScrollBehavior)> {
        self.scroll_calls.lock().expect("calls").clone()
    }
}

impl Viewport for TestViewport {
    fn scroll_offset(&self) -> f64 {
        *self.offset.lock().expect("offset")
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn element_bounds(&self, id: &str) -> Option<ElementBounds> {
        self.elements.lock().expect("elements").get(id).copied()
    }

    fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
        self.scroll_calls
            .lock()
            .expect("calls")
            .push((offset, behavior));
    }

    fn request_animation_frame(&self) {}
}

#[test]
fn missing_target_issues_no_scroll_call() {
    let viewport = Arc::new(TestViewport::default());
    let navigator = SmoothNavigator::new(Arc::clone(&viewport) as Arc<dyn Viewport>);
    navigator.scroll_to_section(SectionId::About);
    assert!(viewport.calls().is_empty());
}

#[test]
fn target_offset_lands_below_the_fixed_header() {
    // Element at absolute document offset 1000, page at the top.
    let viewport = Arc::new(TestViewport::default().with_element(
        "about",
        ElementBounds {
            top: 1000.0,
            height: 400.0,
        },
    ));
    let navigator = SmoothNavigator::new(Arc::clone(&viewport) as Arc<dyn Viewport>);
    navigator.scroll_to_section(SectionId::About);
    assert_eq!(viewport.calls(), vec![(920.0, ScrollBehavior::Smooth)]);
}

#[test]
fn current_scroll_offset_feeds_the_target_computation() {
    // Already scrolled 1000px; the element sits 100px above the viewport top,
    // i.e. at absolute offset 900.
    let viewport = Arc::new(TestViewport::default().with_element(
        "skills",
        ElementBounds {
            top: -100.0,
            height: 300.0,
        },
    ));
    viewport.set_offset(1000.0);
    let navigator = SmoothNavigator::new(Arc::clone(&viewport) as Arc<dyn Viewport>);
    navigator.scroll_to_section(SectionId::Skills);
    assert_eq!(viewport.calls(), vec![(820.0, ScrollBehavior::Smooth)]);
}

#[test]
fn repeated_navigation_to_a_settled_target_recomputes_the_same_offset() {
    let viewport = Arc::new(TestViewport::default().with_element(
        "about",
        ElementBounds {
            top: 1000.0,
            height: 400.0,
        },
    ));
    let navigator = SmoothNavigator::new(Arc::clone(&viewport) as Arc<dyn Viewport>);
    navigator.scroll_to_section(SectionId::About);

    // The animated scroll settled: offset 920, element top now 80px below
    // the viewport top. Navigating again must not move anywhere new.
    viewport.set_offset(920.0);
    viewport
        .elements
        .lock()
        .expect("elements")
        .insert(
            "about".to_string(),
            ElementBounds {
                top: 80.0,
                height: 400.0,
            },
        );
    navigator.scroll_to_section(SectionId::About);

    let calls = viewport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, calls[1].0);
}

#[test]
fn scroll_to_top_targets_offset_zero() {
    let viewport = Arc::new(TestViewport::default());
    viewport.set_offset(4321.0);
    let navigator = SmoothNavigator::new(Arc::clone(&viewport) as Arc<dyn Viewport>);
    navigator.scroll_to_top();
    assert_eq!(viewport.calls(), vec![(0.0, ScrollBehavior::Smooth)]);
}
