//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components render page content; `theme_provider`, `theme_toggle`
//! and `reveal` carry the client-side behaviors the sections share.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod theme_provider;
pub mod theme_toggle;
