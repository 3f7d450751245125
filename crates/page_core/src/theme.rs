use std::sync::Arc;

use crate::prefs::PreferenceStore;

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    fn parse(raw: &str) -> Option<ThemePreference> {
        match raw {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// Theme selection persisted across visits. `System` defers to the host's
/// color-scheme preference at resolution time.
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    preference: ThemePreference,
}

impl ThemeController {
    /// Restores the stored preference; malformed or missing values fall back
    /// to the default.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let preference = store
            .get(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default();
        Self { store, preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.store.set(THEME_STORAGE_KEY, preference.as_str());
    }

    pub fn resolved(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self.preference {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    /// Flips between light and dark; a `System` preference resolves first so
    /// the toggle always moves away from what is currently shown.
    pub fn toggle(&mut self, system_prefers_dark: bool) {
        let next = match self.resolved(system_prefers_dark) {
            ResolvedTheme::Light => ThemePreference::Dark,
            ResolvedTheme::Dark => ThemePreference::Light,
        };
        self.set(next);
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
