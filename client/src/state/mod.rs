//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each behavior keeps its logic in a small plain-Rust model (`theme`,
//! `reveal`, `sections`) so it can be tested without a browser. The
//! reactive and DOM wiring lives in `util` and `components`.

pub mod reveal;
pub mod sections;
pub mod theme;
