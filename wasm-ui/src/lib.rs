//! Web UI for qa-steps-rs
//!
//! A Yew-based automation showcase: browse curated test lessons, author
//! custom steps, and view the generated automation script.

mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
