//! Theme signal lookup for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`crate::app::App`] provides one `RwSignal<ThemeState>` for the whole
//! widget. Components rendered outside that tree have no theme to read, and
//! the lookup fails instead of falling back to a default.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use roster::theme::{self, ThemeError, ThemeState};

/// Look up the provided theme signal.
///
/// # Errors
///
/// Returns [`ThemeError::OutsideProvider`] when no ancestor provided one.
pub fn use_theme() -> Result<RwSignal<ThemeState>, ThemeError> {
    theme::require(use_context::<RwSignal<ThemeState>>())
}

/// Look up the provided theme signal, like `expect_context`.
///
/// # Panics
///
/// Panics with the [`ThemeError::OutsideProvider`] message when no ancestor
/// provided a theme.
pub fn expect_theme() -> RwSignal<ThemeState> {
    match use_theme() {
        Ok(theme) => theme,
        Err(err) => panic!("{err}"),
    }
}
