//! # client
//!
//! Leptos + WASM frontend for the HRMS.
//!
//! Pages, components and browser glue live here; who may see what is decided
//! by the `session` crate. Every page is registered in [`routes`] and reached
//! through the guarded [`components::route_outlet::RouteOutlet`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
