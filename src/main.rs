//! Vigil Dashboard
//!
//! Fall detection monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Aggregated fall statistics (today / week / month / total)
//! - 30-day timeline, severity and per-location charts
//! - Paginated fall event table with video playback
//! - Auto-refresh while the page is visible
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Vigil API over HTTP; videos are
//! resolved either directly or through the backend's signed-URL endpoint.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
