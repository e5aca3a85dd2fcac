//! Page footer with a back-to-top control.

use leptos::prelude::*;

use crate::content;
use crate::util::navigation::document_navigator;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__copy">{format!("© {}", content::NAME)}</span>
            <button
                class="btn site-footer__top"
                type="button"
                title="Back to top"
                on:click=move |_| document_navigator().scroll_to_top()
            >
                "↑ Top"
            </button>
        </footer>
    }
}
