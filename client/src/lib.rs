//! # client
//!
//! Leptos + WASM front end for the two-team roster widget.
//!
//! This crate renders the `roster` models: both groups with initials avatars,
//! a per-row move button on hover, the mismatch note under an over-capacity
//! group, and the light/dark theme switch. All roster and theme rules live in
//! `roster`; components only read signals and call into it.


pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Member list the widget mounts with, in the server payload shape.
pub const MEMBERS_PAYLOAD: &str = r#"[
    { "name": "Arienne Kailyn Newell" },
    { "name": "Morten Wilkinson" },
    { "name": "Benedikte Beyer" },
    { "name": "Serena Montagne" },
    { "name": "Rasmus Juventas Gadsby" },
    { "name": "Amrit Boris Hahn" },
    { "name": "Samson Gunnhildr Ferber" },
    { "name": "Anton David" }
]"#;

/// Browser entry point: install panic/log hooks and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let members = match roster::members_from_json(MEMBERS_PAYLOAD) {
        Ok(members) => members,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    };
    log::info!("mounting roster widget with {} members", members.len());

    leptos::mount::mount_to_body(move || view! { <App members=members/> });
}
