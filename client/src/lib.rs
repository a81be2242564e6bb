//! # taaru-client
//!
//! Leptos front end for the Taaru Sénégal marketing site: public pages,
//! the navbar/footer shell, the gallery, events and contact sections, and
//! the login/registration stubs.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked
//! into `taaru-server`. Without either feature the pure modules (`routes`,
//! `state`, `content`, `net`) compile natively for unit tests.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
