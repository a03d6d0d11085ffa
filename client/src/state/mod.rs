//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Durable roster and theme state come from the `roster` crate and are shared
//! through Leptos context. Only presentation-local state (row hover) is
//! defined here.

pub mod hover;
pub mod theme;
