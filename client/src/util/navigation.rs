//! In-page section navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Header and hero controls call `SectionNavigator` instead of following
//! anchor links directly. Scrolls are fire-and-forget: a second request simply
//! replaces the browser's in-flight smooth-scroll animation.
//!
//! A missing target is not an error. It usually means the section has not
//! mounted yet, so the request is dropped.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::state::sections::Section;

/// Something that can locate anchors and scroll to a vertical offset.
pub trait ScrollSurface {
    /// Document-relative top of the element with `id`, if it is rendered.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    /// Start a smooth scroll so `top` lands at the top of the viewport.
    fn smooth_scroll_to(&self, top: f64);
}

/// The live browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ScrollSurface for DocumentSurface {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let el = window.document()?.get_element_by_id(id)?;
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            Some(el.get_bounding_client_rect().top() + scroll_y)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            None
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = top;
        }
    }
}

/// Maps section ids to scroll actions on a `ScrollSurface`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionNavigator<S> {
    surface: S,
}

impl<S: ScrollSurface> SectionNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Smooth-scroll to the element with `id`.
    ///
    /// Returns `false` without scrolling when no such element is rendered.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        let Some(top) = self.surface.anchor_top(id) else {
            #[cfg(feature = "hydrate")]
            log::debug!("navigation: no element with id '{id}', skipping scroll");
            return false;
        };
        self.surface.smooth_scroll_to(top.max(0.0));
        true
    }

    /// Registry form of `scroll_to_section`.
    pub fn scroll_to(&self, section: Section) -> bool {
        self.scroll_to_section(section.anchor_id())
    }

    /// Smooth-scroll to the document origin.
    pub fn scroll_to_top(&self) {
        self.surface.smooth_scroll_to(0.0);
    }
}

/// Navigator bound to the live document.
pub fn document_navigator() -> SectionNavigator<DocumentSurface> {
    SectionNavigator::new(DocumentSurface)
}
