#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_light_in_native_tests() {
    assert_eq!(read_preference(), ThemeState::default());
}

#[test]
fn toggle_flips_theme() {
    assert!(toggle(ThemeState::new(false)).dark_mode);
    assert!(!toggle(ThemeState::new(true)).dark_mode);
}

#[test]
fn toggle_leaves_input_untouched() {
    let current = ThemeState::new(false);
    let next = toggle(current);
    assert_ne!(current, next);
    assert_eq!(current, ThemeState::default());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeState::new(false));
    apply(ThemeState::new(true));
}
