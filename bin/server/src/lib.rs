//! SamCast admin web server and UI.
//!
//! This crate provides the Leptos-based login screen of the SamCast admin
//! panel, and the server functions that forward to the upstream admin API.

#![allow(non_snake_case)]

pub mod app;
pub mod auth;
pub mod notifications;
pub mod pages;
pub mod types;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod upstream;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
