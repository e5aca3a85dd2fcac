//! Single-page portfolio: header, the five sections, footer.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero, projects::Projects,
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="page">
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}
