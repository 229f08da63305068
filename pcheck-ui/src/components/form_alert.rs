//! Dismissible error banner shown above the form.

use crate::state::FormState;
use dioxus::prelude::*;
use pcheck_form::alert::{ALERT_CLASS, ALERT_CONTAINER_CLASS, CLOSE_BUTTON_CLASS};

/// Renders the current banner, if any, in its container.
#[component]
pub fn FormAlert() -> Element {
    let mut state = use_context::<FormState>();
    let message = state
        .form
        .read()
        .alert
        .current()
        .map(|banner| banner.message.clone());

    let on_dismiss = move |_: Event<MouseData>| {
        state.form.write().alert.dismiss();
    };

    rsx! {
        div {
            class: ALERT_CONTAINER_CLASS,
            if let Some(message) = message {
                div {
                    class: ALERT_CLASS,
                    role: "alert",
                    "{message}"
                    button {
                        r#type: "button",
                        class: CLOSE_BUTTON_CLASS,
                        aria_label: "Close",
                        onclick: on_dismiss,
                    }
                }
            }
        }
    }
}
