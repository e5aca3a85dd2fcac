//! Projects section.

use leptos::prelude::*;

use crate::components::about::stagger_delay;
use crate::components::reveal::Reveal;
use crate::content::{self, Project};
use crate::state::sections::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="section projects">
            <Reveal>
                <h2 class="section__title">{Section::Projects.label()}</h2>
            </Reveal>
            <div class="projects__grid">
                {content::PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project=project delay_ms=stagger_delay(i)/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal classes="card project" delay_ms=delay_ms>
            <h3 class="card__title">{project.title}</h3>
            <p class="project__summary">{project.summary}</p>
            <ul class="project__tags">
                {project.tags.iter().map(|tag| view! { <li class="chip">{*tag}</li> }).collect_view()}
            </ul>
            {project.url.map(|url| {
                view! {
                    <a class="project__link" href=url target="_blank" rel="noopener noreferrer">
                        "View source →"
                    </a>
                }
            })}
        </Reveal>
    }
}
