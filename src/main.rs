//! Emoiro page enhancements
//!
//! WASM entry point. The page is rendered by the server; this binary only
//! attaches behavior to it once the document is ready.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(run);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        );
        on_ready.forget();
    } else {
        run();
    }
}

fn run() {
    if let Err(e) = emoiro::start() {
        web_sys::console::error_1(&format!("Emoiro failed to start: {}", e).into());
    }
}
