//! Preference use cases - display theme persisted across runs.

use std::sync::Arc;

use merchmagic_domain::{Theme, THEME_PREFERENCE_KEY};

use crate::infrastructure::ports::PreferenceStore;

/// Container for preference use cases.
pub struct PreferenceUseCases {
    pub theme: Arc<ThemePreference>,
}

impl PreferenceUseCases {
    pub fn new(theme: Arc<ThemePreference>) -> Self {
        Self { theme }
    }
}

pub struct ThemePreference {
    store: Arc<dyn PreferenceStore>,
}

impl ThemePreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Stored theme, `Light` when unset or unreadable.
    pub fn get(&self) -> Theme {
        match self.store.load(THEME_PREFERENCE_KEY) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %value, error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub fn set(&self, theme: Theme) -> Theme {
        self.store.save(THEME_PREFERENCE_KEY, theme.as_str());
        tracing::debug!(theme = %theme, "Theme preference saved");
        theme
    }

    pub fn toggle(&self) -> Theme {
        self.set(self.get().toggled())
    }
}
