//! New Pollution Check form
//!
//! Client-rendered counterpart of the server's check form. It posts the same
//! fields (`vehicle_no`, `wheels`, `vehicle_type`, `duration`) and applies the
//! same client-side rules:
//! 1. Blur/change validate a field and mark it `is-valid` / `is-invalid`.
//! 2. Changing wheels rebuilds the vehicle type options.
//! 3. Submit validates everything; an invalid form is held back with a banner,
//!    a valid one is handed to the browser with the button in its loading state.

use pcheck_dom::config::EnhanceConfig;
use pcheck_form::validation::{SubmitOutcome, LOADING_CLASS};
use pcheck_ui::components::{
    DurationSelector, FormAlert, SubmitButton, VehicleNumberInput, VehicleTypeSelector,
    WheelsSelector,
};
use pcheck_ui::state::FormState;
use dioxus::prelude::*;

/// DOM id of the check form.
const FORM_ID: &str = "check-form";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("check-form-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(FormState::new);

    // ─── Effect: fade the form card in once it is on the page ───
    use_effect(move || {
        match web_sys::window().and_then(|window| window.document()) {
            Some(document) => pcheck_dom::animation::init_dashboard_animations(
                &document,
                &EnhanceConfig::default(),
            ),
            None => log::warn!("No document available; skipping card animations"),
        }
    });

    let submitting = state.form.read().submitting;
    let form_class = if submitting { LOADING_CLASS } else { "" };

    let on_submit = move |evt: Event<FormData>| {
        log::debug!("Form submit event triggered.");
        match state.form.write().submit() {
            SubmitOutcome::Blocked => {
                evt.prevent_default();
                log::debug!("Form submission prevented due to invalid fields.");
            }
            SubmitOutcome::Proceed => log::debug!("Form is valid, applying loading state."),
        }
    };

    // ─── Render ───
    rsx! {
        div {
            class: "container py-4",
            style: "max-width: 640px;",
            div {
                class: "card",
                div {
                    class: "card-body",
                    h2 { class: "card-title mb-4", "New Pollution Check" }

                    FormAlert {}

                    form {
                        id: FORM_ID,
                        class: "{form_class}",
                        method: "post",
                        action: "/",
                        novalidate: true,
                        onsubmit: on_submit,

                        VehicleNumberInput {}
                        WheelsSelector {}
                        VehicleTypeSelector {}
                        DurationSelector {}
                        SubmitButton {}
                    }
                }
            }
        }
    }
}
