//! Marketing Site
//!
//! Leptos pages and components for the marketing site: the contact section
//! launcher, the contact form and the toast viewport. The `ssr` feature
//! builds the axum server, `hydrate` builds the browser bundle.

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
