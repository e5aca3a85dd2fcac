//! Fade-in wrapper driven by `use_reveal`.
//!
//! The wrapper only toggles `reveal--visible`; the actual transform lives in
//! the stylesheet. Duration and delay are set per instance.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::reveal::{DEFAULT_THRESHOLD, RevealOptions};
use crate::util::reveal::use_reveal;

/// Default transition duration for revealed regions.
pub const DEFAULT_DURATION_MS: u32 = 600;

#[component]
pub fn Reveal(
    /// Transition delay, used to stagger siblings.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: u32,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(optional, into)] root_margin: Option<String>,
    /// Keep the region visible after the first reveal.
    #[prop(default = true)]
    once: bool,
    /// Extra classes for the wrapper element.
    #[prop(optional, into)]
    classes: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let mut options = RevealOptions::default().with_threshold(threshold).with_trigger_once(once);
    if let Some(margin) = root_margin {
        options = options.with_root_margin(margin);
    }
    let visible = use_reveal(node, options);

    view! {
        <div
            node_ref=node
            class=move || reveal_class(&classes, visible.get())
            style=reveal_style(duration_ms, delay_ms)
        >
            {children()}
        </div>
    }
}

pub(crate) fn reveal_class(extra: &str, visible: bool) -> String {
    let mut class = String::from("reveal");
    if visible {
        class.push_str(" reveal--visible");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

pub(crate) fn reveal_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("transition-duration: {duration_ms}ms; transition-delay: {delay_ms}ms;")
}
