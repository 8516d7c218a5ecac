//! # client
//!
//! Leptos + WASM frontend for Oscar's Boulder Guide: a chat-style page that
//! accepts a photo of a climbing route and plays back a scripted sequence of
//! pseudo-analysis messages before delivering the punchline.
//!
//! This crate contains the page, components, application state, the fixed
//! analysis script, and the timed sequencer that drives message playback.
//! Browser-only facilities (timers, `FileReader`, console logging) sit behind
//! the `csr` feature so the crate also compiles natively for unit tests.

pub mod analysis;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount
/// the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger was already initialized");
    }

    // The handle would unmount on drop; the app lives for the whole page.
    std::mem::forget(leptos::mount::mount_to_body(crate::app::App));
}
