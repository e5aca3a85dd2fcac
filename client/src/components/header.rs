//! Fixed site header with section navigation, mobile menu and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links keep their `#id` hrefs so the page works before hydration. Once
//! hydrated, clicks are intercepted: the mobile menu closes first, then the
//! navigator starts a smooth scroll.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::state::sections::Section;
use crate::util::navigation::document_navigator;

/// Sections listed in the header. `Home` is reached through the brand link.
pub(crate) fn nav_sections() -> impl Iterator<Item = Section> {
    Section::ALL.into_iter().filter(|s| *s != Section::Home)
}

pub(crate) fn menu_class(open: bool) -> &'static str {
    if open { "site-nav site-nav--open" } else { "site-nav" }
}

#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_open.set(false);
        document_navigator().scroll_to_top();
    };

    view! {
        <header class="site-header">
            <a href=Section::Home.href() class="site-header__brand" on:click=on_brand>
                {content::NAME}
            </a>

            <button
                class="btn site-header__menu-toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <nav class=move || menu_class(menu_open.get())>
                {nav_sections()
                    .map(|section| {
                        view! {
                            <a
                                href=section.href()
                                class="site-nav__link"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    menu_open.set(false);
                                    document_navigator().scroll_to(section);
                                }
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <ThemeToggle/>
        </header>
    }
}
