//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page not-found">
            <h1>"404"</h1>
            <p>"Nothing lives at this address."</p>
            <a class="btn" href="/">"Back home"</a>
        </main>
    }
}
