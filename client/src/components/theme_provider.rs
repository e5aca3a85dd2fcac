//! Root-scoped theme capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` owns the only `ThemeManager` in the tree and hands out a
//! `ThemeContext` through Leptos context. Components read and change the
//! theme through that context and never touch storage themselves.
//!
//! While the preference is `system` the provider holds a
//! `ColorSchemeListener`. The listener is dropped when the preference moves
//! away from `system` and when the provider scope is cleaned up.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::{EffectiveTheme, ThemeConfig, ThemeError, ThemeManager, ThemePreference};
use crate::util::theme::{BrowserStorage, apply_theme};
#[cfg(feature = "hydrate")]
use crate::util::theme::{ColorSchemeListener, system_prefers_dark};

/// Handle to the provider's theme state. Cheap to copy.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    manager: RwSignal<ThemeManager<BrowserStorage>>,
}

impl ThemeContext {
    pub(crate) fn new(config: ThemeConfig) -> Self {
        Self { manager: RwSignal::new(ThemeManager::new(config, BrowserStorage)) }
    }

    /// Current stored preference (tracked).
    pub fn preference(&self) -> ThemePreference {
        self.manager.with(ThemeManager::preference)
    }

    /// Theme applied to the document (tracked). Never `system`.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.manager.with(ThemeManager::effective_theme)
    }

    /// Persist `preference` and re-apply the document theme immediately.
    pub fn set_preference(&self, preference: ThemePreference) {
        self.manager.update(|m| m.set_preference(preference));
        let theme = self.manager.with_untracked(ThemeManager::effective_theme);
        apply_theme(theme);
        #[cfg(feature = "hydrate")]
        log::debug!("theme: preference={preference} effective={}", theme.class_name());
    }

    /// Advance to the next preference in the toggle cycle.
    pub fn cycle(&self) {
        let next = self.manager.with_untracked(ThemeManager::preference).next();
        self.set_preference(next);
    }

    /// Record an OS color-scheme change. Ignored once the provider is gone.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) fn set_system_dark(&self, dark: bool) {
        if self.manager.try_with_untracked(ThemeManager::system_dark) == Some(!dark) {
            self.manager.update(|m| {
                m.set_system_dark(dark);
            });
        }
    }
}

/// What the provider does with its OS color-scheme listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) enum ListenerAction {
    Keep,
    Subscribe,
    Drop,
}

/// Listener transition for the current preference and subscription state.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn listener_action(follows_system: bool, subscribed: bool) -> ListenerAction {
    match (follows_system, subscribed) {
        (true, false) => ListenerAction::Subscribe,
        (false, true) => ListenerAction::Drop,
        (true, true) | (false, false) => ListenerAction::Keep,
    }
}

/// Theme capability for the current scope.
///
/// # Errors
///
/// Returns `ThemeError::MissingProvider` when called outside a
/// `<ThemeProvider/>` subtree.
pub fn use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Fail-fast form of `use_theme` for components.
///
/// # Panics
///
/// Panics when called outside a `<ThemeProvider/>` subtree. That is a wiring
/// mistake, not a runtime condition.
pub fn expect_theme() -> ThemeContext {
    match use_theme() {
        Ok(theme) => theme,
        Err(err) => panic!("{err}"),
    }
}

/// Provide the theme capability to `children`.
#[component]
pub fn ThemeProvider(
    /// `localStorage` key for the persisted preference.
    #[prop(optional, into)]
    storage_key: Option<String>,
    /// Preference used when nothing valid is stored.
    #[prop(optional)]
    default_preference: Option<ThemePreference>,
    children: Children,
) -> impl IntoView {
    let mut config = ThemeConfig::default();
    if let Some(key) = storage_key {
        config.storage_key = key;
    }
    if let Some(preference) = default_preference {
        config.default_preference = preference;
    }

    let theme = ThemeContext::new(config);
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let manager = theme.manager;

        // Storage and the media query only exist after hydration.
        Effect::new(move || {
            manager.update(ThemeManager::reload);
            theme.set_system_dark(system_prefers_dark());
        });

        let listener = StoredValue::new_local(None::<ColorSchemeListener>);
        Effect::new(move || {
            let follows_system = manager.with(ThemeManager::follows_system);
            match listener_action(follows_system, listener.with_value(Option::is_some)) {
                ListenerAction::Keep => {}
                ListenerAction::Drop => {
                    listener.set_value(None);
                    log::debug!("theme: stopped following system color scheme");
                }
                ListenerAction::Subscribe => {
                    // The OS signal may have moved while nobody was listening.
                    theme.set_system_dark(system_prefers_dark());
                    listener.set_value(ColorSchemeListener::subscribe(move |dark| theme.set_system_dark(dark)));
                    log::debug!("theme: following system color scheme");
                }
            }
        });

        Effect::new(move || apply_theme(manager.with(ThemeManager::effective_theme)));

        on_cleanup(move || {
            let _ = listener.try_update_value(Option::take);
        });
    }

    children()
}
