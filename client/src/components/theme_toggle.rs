//! Header button cycling the theme preference.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::theme_provider::expect_theme;
use crate::state::theme::{EffectiveTheme, ThemePreference};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_theme();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| theme.cycle()
            title=move || toggle_title(theme.preference())
            aria-label=move || toggle_title(theme.preference())
        >
            {move || toggle_icon(theme.preference(), theme.effective_theme())}
        </button>
    }
}

fn toggle_icon(preference: ThemePreference, effective: EffectiveTheme) -> &'static str {
    match (preference, effective) {
        (ThemePreference::System, _) => "◐",
        (_, EffectiveTheme::Dark) => "☾",
        (_, EffectiveTheme::Light) => "☀",
    }
}

fn toggle_title(preference: ThemePreference) -> String {
    format!("Theme: {} (switch to {})", preference.label(), preference.next().label())
}
