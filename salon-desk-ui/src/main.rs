//! Salon Desk Front-End
//!
//! Browser host for the front-desk widgets, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. Each component keeps one core widget in a signal
//! and routes DOM events into the widget's own transitions, so selection and
//! form state follow exactly the same rules as in the terminal host.

use leptos::*;

mod app;
mod components;
mod demo;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
