//! Light/dark mode switch button.

use leptos::prelude::*;

use crate::state::theme::expect_theme;
use crate::util::dark_mode;

/// Button that flips the theme and stores the new preference.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let theme = expect_theme();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <button class="btn theme-switch" on:click=on_toggle title="Toggle dark mode">
            {move || theme.get().toggle_label()}
        </button>
    }
}
