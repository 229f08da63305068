//! Certificate validity period selector.

use crate::model::Field;
use crate::state::FormState;
use dioxus::prelude::*;
use pcheck_form::vehicle::CheckDuration;

#[component]
pub fn DurationSelector() -> Element {
    let mut state = use_context::<FormState>();
    let form = state.form.read();
    let selected = form.duration.clone();
    let class = format!("form-select {}", form.validity(Field::Duration).class_name());
    drop(form);

    let on_change = move |evt: Event<FormData>| {
        state.form.write().set_duration(evt.value());
    };
    let on_blur = move |_: Event<FocusData>| {
        state.form.write().validate(Field::Duration);
    };

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: "duration",
                class: "form-label",
                "Duration"
            }
            select {
                id: "duration",
                name: Field::Duration.name(),
                class: "{class}",
                required: true,
                onchange: on_change,
                onblur: on_blur,
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_empty(),
                    "Select duration"
                }
                for duration in CheckDuration::ALL {
                    option {
                        value: duration.value(),
                        selected: duration.value() == selected,
                        "{duration.label()}"
                    }
                }
            }
        }
    }
}
