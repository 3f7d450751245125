use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a page section. Section ids form a closed set: every
/// navigation target and every animated element maps 1:1 to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Education,
    Achievements,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// Sections observed for one-shot entrance animations. The hero is
    /// on-screen at load and never animates in.
    pub const ANIMATED: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Achievements => "achievements",
            SectionId::Contact => "contact",
        }
    }

    /// Resolves an `#about`-style anchor or a bare element id. Unknown
    /// anchors yield `None`; callers treat that as a non-fatal miss.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        SectionId::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    pub target: SectionId,
    pub label: &'static str,
}

/// Header link set, in display order.
pub const NAVIGATION_LINKS: [NavigationLink; 6] = [
    NavigationLink {
        target: SectionId::About,
        label: "About",
    },
    NavigationLink {
        target: SectionId::Experience,
        label: "Experience",
    },
    NavigationLink {
        target: SectionId::Skills,
        label: "Skills",
    },
    NavigationLink {
        target: SectionId::Education,
        label: "Education",
    },
    NavigationLink {
        target: SectionId::Achievements,
        label: "Achievements",
    },
    NavigationLink {
        target: SectionId::Contact,
        label: "Contact",
    },
];

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
