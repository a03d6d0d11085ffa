//! Theme preference storage and document theming.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system `prefers-color-scheme` query, and mirrors the active theme onto a
//! `data-theme` attribute on `<html>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds read a
//! light theme and write nothing.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use roster::ThemeState;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "roster_assigner_dark";

/// Theme the widget should start in.
pub fn read_preference() -> ThemeState {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeState::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return ThemeState::new(val == "true");
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        ThemeState::new(prefers_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeState::default()
    }
}

/// Mirror `theme` onto the `<html>` element's `data-theme` attribute.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let value = if theme.dark_mode { "dark" } else { "light" };
            if el.set_attribute("data-theme", value).is_err() {
                log::warn!("failed to set data-theme={value}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply it, and store the new preference.
pub fn toggle(current: ThemeState) -> ThemeState {
    let mut next = current;
    next.toggle();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let value = if next.dark_mode { "true" } else { "false" };
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
        log::debug!("theme switched; dark_mode={}", next.dark_mode);
    }
    next
}
