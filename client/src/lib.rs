//! # client
//!
//! Leptos + WASM frontend for the Playgate video shell.
//!
//! Two routes: the video player landing page (`home`) and the login panel
//! (`login-panel`). A navigation guard keeps unauthenticated visitors on the
//! login panel and bounces authenticated ones back to the player. The session
//! token lives in browser `localStorage` and is attached to outgoing API
//! requests as a bearer header.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
