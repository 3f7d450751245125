use super::*;

#[test]
fn anchor_resolution_accepts_hash_prefixed_and_bare_ids() {
    assert_eq!(SectionId::from_anchor("#about"), Some(SectionId::About));
    assert_eq!(SectionId::from_anchor("about"), Some(SectionId::About));
    assert_eq!(SectionId::from_anchor("#contact"), Some(SectionId::Contact));
}

#[test]
fn anchor_resolution_rejects_unknown_targets() {
    assert_eq!(SectionId::from_anchor("#blog"), None);
    assert_eq!(SectionId::from_anchor(""), None);
    assert_eq!(SectionId::from_anchor("#"), None);
}

#[test]
fn animated_set_excludes_the_hero() {
    assert!(!SectionId::ANIMATED.contains(&SectionId::Hero));
    assert_eq!(SectionId::ANIMATED.len(), SectionId::ALL.len() - 1);
}

#[test]
fn navigation_links_target_distinct_known_sections() {
    for link in NAVIGATION_LINKS {
        assert_eq!(
            SectionId::from_anchor(link.target.as_str()),
            Some(link.target)
        );
    }
    let mut targets: Vec<&str> = NAVIGATION_LINKS
        .iter()
        .map(|link| link.target.as_str())
        .collect();
    targets.dedup();
    assert_eq!(targets.len(), NAVIGATION_LINKS.len());
}
