//! `IntersectionObserver` wiring for scroll-triggered reveals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `use_reveal` binds one element to one `RevealState`. The observer is
//! created once the element mounts and is owned by a guard stored in the
//! calling component's scope. Dropping the guard disconnects the observer, so
//! teardown happens exactly once whether or not the latch fired.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::state::reveal::RevealPhase;
use crate::state::reveal::{RevealOptions, RevealState, RevealStep};

/// Class set on `<html>` once the WASM bundle runs. The stylesheet only hides
/// `.reveal` regions under it.
pub const SCRIPTED_CLASS: &str = "js";

/// Mark the document as scripted so reveal regions start hidden.
pub fn mark_document_scripted() {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = root.class_list().add_1(SCRIPTED_CLASS) {
            log::debug!("reveal: could not mark document scripted: {err:?}");
        }
    }
}

/// Observe `target` and report whether it has been revealed.
///
/// The returned signal starts `false`. With `trigger_once` it flips to `true`
/// on the first qualifying intersection and stays there; otherwise it follows
/// the element in and out of the viewport.
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Signal<bool> {
    let state = RwSignal::new(RevealState::new(options.trigger_once));

    #[cfg(feature = "hydrate")]
    {
        let guard = StoredValue::new_local(None::<RevealObserver>);
        let threshold = options.threshold();

        Effect::new(move || {
            let Some(el) = target.get() else {
                return;
            };
            if guard.with_value(Option::is_some) || state.get_untracked().phase() == RevealPhase::Triggered {
                return;
            }

            let observer = RevealObserver::attach(&el, &options, move |is_intersecting, ratio| {
                apply_entry(state, is_intersecting, ratio, threshold)
            });
            if observer.is_some() {
                state.update(RevealState::begin);
            }
            guard.set_value(observer);
        });

        on_cleanup(move || {
            let _ = guard.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, options);
    }

    Signal::derive(move || state.get().is_visible())
}

/// Feed one intersection entry into `state`.
///
/// A disposed signal means the region is gone, so the observer is released
/// without touching any state.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn apply_entry(state: RwSignal<RevealState>, is_intersecting: bool, ratio: f64, threshold: f64) -> RevealStep {
    state.try_update(|s| s.observe(is_intersecting, ratio, threshold)).unwrap_or(RevealStep::Release)
}

/// Owned `IntersectionObserver` plus its JS callback.
#[cfg(feature = "hydrate")]
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl RevealObserver {
    fn attach<F>(target: &web_sys::Element, options: &RevealOptions, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(bool, f64) -> RevealStep + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_entry(entry.is_intersecting(), entry.intersection_ratio()) == RevealStep::Release {
                    observer.disconnect();
                    log::debug!("reveal: latched, observer released");
                    break;
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(target);
        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
