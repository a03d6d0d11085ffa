//! Root widget component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use roster::{Member, Roster, Side};

use crate::components::team_panel::TeamPanel;
use crate::components::theme_switch::ThemeSwitch;
use crate::util::dark_mode;

/// Root widget component.
///
/// Owns the session state: the roster built from `members` and the theme
/// seeded from the stored preference. Both are provided as context so the
/// switch and both team panels share one copy.
#[component]
pub fn App(members: Vec<Member>) -> impl IntoView {
    provide_meta_context();

    let roster = RwSignal::new(Roster::from_members(members));
    let theme = RwSignal::new(dark_mode::read_preference());
    dark_mode::apply(theme.get_untracked());

    provide_context(roster);
    provide_context(theme);

    view! {
        <Title text="Change Teams"/>

        <div class=move || theme.get().container_class()>
            <main class="roster">
                <h1 class="roster__title">"Change Teams"</h1>
                <div class="roster__panel">
                    <ThemeSwitch/>
                    <div class="roster__teams">
                        <TeamPanel side=Side::Home/>
                        <TeamPanel side=Side::Away/>
                    </div>
                </div>
            </main>
        </div>
    }
}
