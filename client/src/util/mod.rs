//! Browser-facing helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from component logic. Each one is
//! inert outside the `hydrate` build so server rendering never touches
//! browser APIs.

pub mod navigation;
pub mod reveal;
pub mod theme;
