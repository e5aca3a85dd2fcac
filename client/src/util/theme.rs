//! Browser glue for the theme preference.
//!
//! Reads and writes `localStorage`, reads the `prefers-color-scheme` media
//! query, and mirrors the effective theme onto the `<html>` element. Every
//! function is inert outside the `hydrate` build so SSR stays deterministic.
//!
//! TRADE-OFFS
//! ==========
//! Storage and DOM writes are best-effort. A browser that refuses
//! `localStorage` (private mode, disabled cookies) still gets a working theme
//! for the lifetime of the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::theme::EffectiveTheme;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Key-value persistence for the theme preference.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Read the OS dark-mode signal once.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        dark_query().map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mirror `theme` onto `<html>`: add its class, drop the other one.
pub fn apply_theme(theme: EffectiveTheme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let _ = class_list.remove_1(theme.other().class_name());
        let _ = class_list.add_1(theme.class_name());
        let _ = el.set_attribute("data-theme", theme.class_name());
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("color-scheme", theme.class_name());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Subscription to OS color-scheme changes.
///
/// The `change` listener is removed when this value is dropped.
pub struct ColorSchemeListener {
    #[cfg(feature = "hydrate")]
    query: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl ColorSchemeListener {
    /// Call `on_change(prefers_dark)` on every OS color-scheme change.
    ///
    /// Returns `None` when there is no media query support (including SSR).
    pub fn subscribe<F>(on_change: F) -> Option<Self>
    where
        F: Fn(bool) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let query = dark_query()?;
            let callback = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
                on_change(ev.matches());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            query
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { query, callback })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            None
        }
    }
}

impl Drop for ColorSchemeListener {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self
                .query
                .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
        }
    }
}
