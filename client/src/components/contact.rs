//! Contact section with outbound links.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content;
use crate::state::sections::Section;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor_id() class="section contact">
            <Reveal>
                <h2 class="section__title">{Section::Contact.label()}</h2>
                <p class="contact__blurb">{content::CONTACT_BLURB}</p>
            </Reveal>
            <Reveal classes="contact__links" delay_ms=150>
                {content::CONTACT_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="btn contact__link" href=link.href target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </Reveal>
        </section>
    }
}
