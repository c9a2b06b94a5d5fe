//! plan-checkout Web Frontend
//!
//! Leptos-based WASM pricing page. Picks a tier, asks the backend for a
//! hosted checkout session and hands the browser to Stripe.

mod app;
mod pages;
mod components;
mod api;
mod config;
mod stripe_js;
mod toast;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
