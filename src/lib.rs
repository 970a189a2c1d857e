//! # parlor
//!
//! Leptos + WASM frontend for the Parlor chat application.
//!
//! The crate covers the client-side session gate: a static route table, a
//! navigation guard evaluated before every routed view renders, a persisted
//! session flag, and the REST clients for authentication and chat. Pages are
//! thin; all reachability decisions live in [`guard`].

pub mod app;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
