//! About section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content;
use crate::state::sections::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor_id() class="section about">
            <Reveal>
                <h2 class="section__title">{Section::About.label()}</h2>
            </Reveal>
            {content::ABOUT
                .iter()
                .enumerate()
                .map(|(i, paragraph)| {
                    view! {
                        <Reveal delay_ms=stagger_delay(i)>
                            <p class="about__text">{*paragraph}</p>
                        </Reveal>
                    }
                })
                .collect_view()}
        </section>
    }
}

/// Per-item transition delay for staggered lists.
pub(crate) fn stagger_delay(index: usize) -> u32 {
    const STEP_MS: u32 = 100;
    const MAX_MS: u32 = 500;
    u32::try_from(index).map_or(MAX_MS, |i| i.saturating_mul(STEP_MS).min(MAX_MS))
}
