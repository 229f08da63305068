//! Page script for the server-rendered check form and reports dashboard.
//!
//! Loaded by the server templates as a WASM module. Once the document has
//! been parsed it hands it to `pcheck_dom::init`, which reads the optional
//! `#form-enhance-config` block and wires validation, the wheels dependency,
//! the alert banner, and the dashboard animations.

use web_sys::Document;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("No document to enhance");
        return;
    };

    if document.ready_state() == "loading" {
        let loaded: Document = document.clone();
        let listener = pcheck_dom::dom::listen(&document, "DOMContentLoaded", move |_| {
            pcheck_dom::init(&loaded);
        });
        if let Err(err) = listener {
            log::error!("Could not wait for DOMContentLoaded: {}", err);
        }
    } else {
        pcheck_dom::init(&document);
    }
}
