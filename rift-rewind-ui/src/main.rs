//! Rift Rewind Dashboard
//!
//! League of Legends season recap built with Leptos (WASM).
//!
//! # Features
//!
//! - Summoner lookup with a staged loading page
//! - Stats overview, champion pool and monthly performance chart
//! - AI insights, hidden gems, personality profile and roast widgets
//! - PNG export and Twitter sharing of the recap card
//! - Two-player comparison
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Everything that is not DOM work (models, formatting, fetch state
//! machine, loading orchestration) lives in the `rift-rewind` core crate;
//! this crate supplies the `gloo-net` transport and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod export;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = api::resolve_client_config();

    mount_to_body(move || view! { <app::App config=config /> });
}
