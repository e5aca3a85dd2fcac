//! Landing section with name, role and call-to-action buttons.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content;
use crate::state::sections::Section;
use crate::util::navigation::document_navigator;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.anchor_id() class="section hero">
            <Reveal classes="hero__inner">
                <p class="hero__eyebrow">"Hi, I'm"</p>
                <h1 class="hero__name">{content::NAME}</h1>
                <p class="hero__role">{content::ROLE}</p>
                <p class="hero__tagline">{content::TAGLINE}</p>
            </Reveal>
            <Reveal classes="hero__actions" delay_ms=150>
                <button
                    class="btn btn--primary"
                    type="button"
                    on:click=move |_| {
                        document_navigator().scroll_to(Section::Projects);
                    }
                >
                    "View projects"
                </button>
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| {
                        document_navigator().scroll_to(Section::Contact);
                    }
                >
                    "Get in touch"
                </button>
            </Reveal>
        </section>
    }
}
