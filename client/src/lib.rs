//! # client
//!
//! Leptos frontend for the single-page portfolio site.
//!
//! The crate is compiled twice: with `ssr` it is linked into the axum server
//! and renders the page to HTML, with `hydrate` it is built to WASM and takes
//! over the server-rendered markup in the browser.
//!
//! `content` holds the hardcoded profile data, `state` the pure UI logic
//! (filtering, gallery cycling, form validation), `components` the section
//! views, and `net` the contact wire types plus the browser-side API call.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
