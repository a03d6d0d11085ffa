use leptos::reactive::owner::Owner;

use super::*;

// =============================================================
// use_theme
// =============================================================

#[test]
fn use_theme_outside_provider_fails_fast() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(matches!(use_theme(), Err(ThemeError::OutsideProvider)));
    });
}

#[test]
fn use_theme_returns_provided_signal() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(ThemeState::new(true)));
        let theme = use_theme().expect("theme should be provided");
        assert!(theme.get_untracked().dark_mode);
    });
}

#[test]
fn use_theme_is_visible_to_child_owners() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(ThemeState::default()));
        let child = owner.child();
        child.with(|| {
            let theme = use_theme().expect("child should inherit theme");
            theme.update(ThemeState::toggle);
        });
        let theme = use_theme().expect("theme should be provided");
        assert!(theme.get_untracked().dark_mode);
    });
}

// =============================================================
// expect_theme
// =============================================================

#[test]
#[should_panic(expected = "theme state must be used within a theme provider")]
fn expect_theme_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = expect_theme();
    });
}
