//! Theme preference model.
//!
//! DESIGN
//! ======
//! The stored preference (`light`, `dark`, `system`) and the applied theme
//! (`light`, `dark`) are different types. `EffectiveTheme` is always derived
//! from the preference plus the OS color-scheme signal and is never persisted.
//!
//! `ThemeManager` owns the single copy of that state. It is generic over
//! `ThemeStorage` so the browser glue and tests share the same logic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::util::theme::ThemeStorage;

/// Default `localStorage` key for the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";

/// Errors raised by the theme capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme accessed outside of a <ThemeProvider/> scope")]
    MissingProvider,
    #[error("invalid theme preference '{0}' (expected 'light', 'dark' or 'system')")]
    InvalidPreference(String),
}

/// User-selected display preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS `prefers-color-scheme` signal.
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Parse the persisted string form. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next value in the toggle cycle: light, dark, system, light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    /// Project a preference onto a concrete theme.
    #[must_use]
    pub fn resolve(preference: ThemePreference, system_prefers_dark: bool) -> Self {
        match preference {
            ThemePreference::Light => Self::Light,
            ThemePreference::Dark => Self::Dark,
            ThemePreference::System if system_prefers_dark => Self::Dark,
            ThemePreference::System => Self::Light,
        }
    }

    /// Class name placed on the `<html>` element.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Provider configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default_preference: ThemePreference,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), default_preference: ThemePreference::System }
    }
}

/// Single writer for the theme preference and its derived theme.
#[derive(Clone, Debug)]
pub struct ThemeManager<S> {
    config: ThemeConfig,
    storage: S,
    preference: ThemePreference,
    system_dark: bool,
}

impl<S: ThemeStorage> ThemeManager<S> {
    /// Build a manager at the configured default without touching storage.
    ///
    /// Server rendering and the first hydration pass start here so both
    /// produce the same markup; `reload` then picks up the stored value.
    pub fn new(config: ThemeConfig, storage: S) -> Self {
        let preference = config.default_preference;
        Self { config, storage, preference, system_dark: false }
    }

    /// Build a manager from whatever is currently persisted.
    ///
    /// Unrecognized stored values are treated as absent.
    pub fn load(config: ThemeConfig, storage: S, system_dark: bool) -> Self {
        let preference = read_stored(&config, &storage);
        Self { config, storage, preference, system_dark }
    }

    /// Re-read the persisted preference, e.g. after hydration.
    pub fn reload(&mut self) {
        self.preference = read_stored(&self.config, &self.storage);
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Persist `preference` and make it current.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.storage.save(&self.config.storage_key, preference.as_str());
        self.preference = preference;
    }

    /// String entry point for untyped callers.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::InvalidPreference` unless `raw` is one of
    /// `light`, `dark` or `system`. Nothing is persisted on error.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<(), ThemeError> {
        let preference = ThemePreference::parse(raw).ok_or_else(|| ThemeError::InvalidPreference(raw.to_owned()))?;
        self.set_preference(preference);
        Ok(())
    }

    #[must_use]
    pub fn effective_theme(&self) -> EffectiveTheme {
        EffectiveTheme::resolve(self.preference, self.system_dark)
    }

    /// Whether the OS color-scheme signal currently matters.
    #[must_use]
    pub fn follows_system(&self) -> bool {
        self.preference == ThemePreference::System
    }

    #[must_use]
    pub fn system_dark(&self) -> bool {
        self.system_dark
    }

    /// Record an OS color-scheme change. Returns the new effective theme.
    pub fn set_system_dark(&mut self, dark: bool) -> EffectiveTheme {
        self.system_dark = dark;
        self.effective_theme()
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

fn read_stored<S: ThemeStorage>(config: &ThemeConfig, storage: &S) -> ThemePreference {
    storage
        .load(&config.storage_key)
        .as_deref()
        .and_then(ThemePreference::parse)
        .unwrap_or(config.default_preference)
}
