use shared::domain::SectionId;

use super::*;
use crate::viewport::ElementBounds;

const VIEWPORT_HEIGHT: f64 = 800.0;

fn sample_at(id: SectionId, top: f64, height: f64) -> IntersectionSample {
    IntersectionSample {
        id,
        bounds: ElementBounds { top, height },
        viewport_height: VIEWPORT_HEIGHT,
    }
}

#[test]
fn ratio_counts_only_the_part_inside_the_inset_zone() {
    // Trigger zone ends 50px above the bottom edge, at y = 750.
    let half_in = ElementBounds {
        top: 700.0,
        height: 100.0,
    };
    assert!((intersection_ratio(half_in, VIEWPORT_HEIGHT) - 0.5).abs() < 1e-9);

    let barely_in = ElementBounds {
        top: 745.0,
        height: 100.0,
    };
    assert!(intersection_ratio(barely_in, VIEWPORT_HEIGHT) < VISIBILITY_RATIO);

    let below_zone = ElementBounds {
        top: 760.0,
        height: 100.0,
    };
    assert_eq!(intersection_ratio(below_zone, VIEWPORT_HEIGHT), 0.0);
}

#[test]
fn ratio_clips_elements_partially_above_the_viewport() {
    let half_off_top = ElementBounds {
        top: -50.0,
        height: 100.0,
    };
    assert!((intersection_ratio(half_off_top, VIEWPORT_HEIGHT) - 0.5).abs() < 1e-9);

    let fully_above = ElementBounds {
        top: -300.0,
        height: 100.0,
    };
    assert_eq!(intersection_ratio(fully_above, VIEWPORT_HEIGHT), 0.0);
}

#[test]
fn zero_height_elements_never_intersect() {
    let flat = ElementBounds {
        top: 400.0,
        height: 0.0,
    };
    assert_eq!(intersection_ratio(flat, VIEWPORT_HEIGHT), 0.0);
}

#[test]
fn sections_are_hidden_until_their_first_qualifying_sample() {
    let mut tracker = VisibilityTracker::new();
    tracker.observe(SectionId::About);
    assert!(!tracker.is_visible(SectionId::About));

    assert_eq!(
        tracker.sample(sample_at(SectionId::About, 760.0, 100.0)),
        None
    );
    assert!(!tracker.is_visible(SectionId::About));

    assert_eq!(
        tracker.sample(sample_at(SectionId::About, 400.0, 100.0)),
        Some(SectionId::About)
    );
    assert!(tracker.is_visible(SectionId::About));
}

#[test]
fn visibility_is_monotonic_across_disqualifying_samples() {
    let mut tracker = VisibilityTracker::new();
    tracker.observe(SectionId::Skills);
    tracker.sample(sample_at(SectionId::Skills, 400.0, 100.0));
    assert!(tracker.is_visible(SectionId::Skills));

    // The section scrolled back out of view; it must stay revealed and the
    // edge must not fire again.
    assert_eq!(
        tracker.sample(sample_at(SectionId::Skills, 2000.0, 100.0)),
        None
    );
    assert_eq!(
        tracker.sample(sample_at(SectionId::Skills, 400.0, 100.0)),
        None
    );
    assert!(tracker.is_visible(SectionId::Skills));
}

#[test]
fn samples_for_untracked_sections_are_ignored() {
    let mut tracker = VisibilityTracker::new();
    assert_eq!(
        tracker.sample(sample_at(SectionId::Contact, 400.0, 100.0)),
        None
    );
    assert!(!tracker.is_visible(SectionId::Contact));
}

#[test]
fn reveal_all_marks_everything_without_samples() {
    let mut tracker = VisibilityTracker::new();
    for id in SectionId::ANIMATED {
        tracker.observe(id);
    }
    tracker.reveal_all(SectionId::ANIMATED);
    for id in SectionId::ANIMATED {
        assert!(tracker.is_visible(id));
    }
    assert!(tracker.still_observing().is_empty());
}

#[test]
fn observing_a_revealed_section_again_does_not_rearm_it() {
    let mut tracker = VisibilityTracker::new();
    tracker.observe(SectionId::About);
    tracker.sample(sample_at(SectionId::About, 400.0, 100.0));
    tracker.observe(SectionId::About);
    assert!(tracker.still_observing().is_empty());
}

#[test]
fn cancelling_observations_leaves_revealed_state_intact() {
    let mut tracker = VisibilityTracker::new();
    tracker.observe(SectionId::About);
    tracker.observe(SectionId::Contact);
    tracker.sample(sample_at(SectionId::About, 400.0, 100.0));

    tracker.cancel_observations();
    assert!(tracker.still_observing().is_empty());
    assert!(tracker.is_visible(SectionId::About));
    assert_eq!(
        tracker.sample(sample_at(SectionId::Contact, 400.0, 100.0)),
        None
    );
}
