//! Scroll-triggered reveal latch.
//!
//! DESIGN
//! ======
//! Each revealed region owns one `RevealState`. The phase moves
//! `Unobserved -> Observing` when an observer is attached. Under
//! `trigger_once` the first qualifying intersection moves it to `Triggered`,
//! which is terminal; otherwise the visibility flag follows every entry.
//!
//! The state is `Copy` so it can sit in a reactive signal and be updated from
//! the observer callback without borrowing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Default fraction of the region that must be visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default root margin passed to the observer.
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Observer configuration for one region.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, root_margin: DEFAULT_ROOT_MARGIN.to_owned(), trigger_once: true }
    }
}

impl RevealOptions {
    /// Set the intersection threshold, clamped to `[0, 1]`. NaN maps to 0.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        self
    }

    /// CSS-style margin around the viewport, e.g. `"0px 0px -80px 0px"`.
    #[must_use]
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    #[must_use]
    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Lifecycle of one observed region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unobserved,
    Observing,
    /// Latched visible; the observer has been released.
    Triggered,
}

/// What the observer glue should do after an entry was processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Continue,
    /// Disconnect the observer; no further entries matter.
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    phase: RevealPhase,
    visible: bool,
    trigger_once: bool,
}

impl RevealState {
    #[must_use]
    pub fn new(trigger_once: bool) -> Self {
        Self { phase: RevealPhase::Unobserved, visible: false, trigger_once }
    }

    /// Mark the observer as attached. No-op once triggered.
    pub fn begin(&mut self) {
        if self.phase == RevealPhase::Unobserved {
            self.phase = RevealPhase::Observing;
        }
    }

    /// Apply one intersection entry.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> RevealStep {
        match self.phase {
            RevealPhase::Triggered => return RevealStep::Release,
            RevealPhase::Unobserved => self.phase = RevealPhase::Observing,
            RevealPhase::Observing => {}
        }

        let in_view = is_intersecting && ratio >= threshold;
        if self.trigger_once {
            if in_view {
                self.visible = true;
                self.phase = RevealPhase::Triggered;
                return RevealStep::Release;
            }
            return RevealStep::Continue;
        }

        self.visible = in_view;
        RevealStep::Continue
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}
