//! Submit button with a loading state.

use crate::state::FormState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// Button text
    #[props(default = "Add Check".to_string())]
    pub label: String,
}

/// Disabled with a spinner once a valid submit is in flight.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let state = use_context::<FormState>();
    let submitting = state.form.read().submitting;

    rsx! {
        button {
            r#type: "submit",
            class: "btn btn-primary w-100",
            disabled: submitting,
            if submitting {
                span {
                    class: "spinner-border spinner-border-sm me-2",
                    role: "status",
                    aria_hidden: "true",
                }
                "Processing..."
            } else {
                "{props.label}"
            }
        }
    }
}
