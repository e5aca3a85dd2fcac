//! Skills section: one card per skill group.

use leptos::prelude::*;

use crate::components::about::stagger_delay;
use crate::components::reveal::Reveal;
use crate::content;
use crate::state::sections::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor_id() class="section skills">
            <Reveal>
                <h2 class="section__title">{Section::Skills.label()}</h2>
            </Reveal>
            <div class="skills__grid">
                {content::SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <Reveal classes="card skills__group" delay_ms=stagger_delay(i)>
                                <h3 class="card__title">{group.title}</h3>
                                <ul class="skills__list">
                                    {group.items.iter().map(|item| view! { <li class="chip">{*item}</li> }).collect_view()}
                                </ul>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
