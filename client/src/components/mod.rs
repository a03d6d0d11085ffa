//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the roster widget while reading/writing the roster and
//! theme signals provided by [`crate::app::App`].

pub mod team_panel;
pub mod theme_switch;
