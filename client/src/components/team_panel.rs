//! One team's titled container and its member rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are rebuilt from the shared roster signal on every transfer. Hover is
//! tracked per panel by row index and never leaves this component.

use leptos::prelude::*;
use roster::{Roster, Side};

use crate::state::hover::RowHover;

/// Titled container for one group.
#[component]
pub fn TeamPanel(side: Side) -> impl IntoView {
    view! {
        <div class="team-container">
            <h3 class="team-container__title">{side.label()}</h3>
            <div class="team-container__body">
                <TeamMembers side=side/>
            </div>
        </div>
    }
}

/// Member rows for one group plus its mismatch note.
///
/// Hovering a row reveals a button that moves that member to the other group.
#[component]
pub fn TeamMembers(side: Side) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let hover = RwSignal::new(RowHover::default());
    let move_label = format!("Move to {}", side.other().label());

    let rows = move || {
        roster
            .with(|r| r.group(side).to_vec())
            .into_iter()
            .enumerate()
            .map(|(index, member)| {
                let initials = member.initials();
                let name = member.name.clone();
                let label = move_label.clone();
                let on_move = move |_| {
                    roster.update(|r| r.transfer(side, &member));
                };

                view! {
                    <div
                        class="member-row"
                        on:mouseenter=move |_| hover.update(|h| h.enter(index))
                        on:mouseleave=move |_| hover.update(RowHover::leave)
                    >
                        <div class="initial-circle">{initials}</div>
                        <div class="member-row__name">{name}</div>
                        <Show when=move || hover.get().is_hovered(index)>
                            <button class="btn member-row__move" on:click=on_move.clone()>
                                {label.clone()}
                            </button>
                        </Show>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let mismatch = move || roster.with(|r| r.mismatch(side));

    view! {
        <div class="team-members-container">
            {rows}
            {move || {
                mismatch().map(|message| view! { <div class="mismatch-validation">{message}</div> })
            }}
        </div>
    }
}
