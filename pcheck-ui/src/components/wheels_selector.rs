//! Dropdown selector for the number of wheels.

use crate::model::Field;
use crate::state::FormState;
use dioxus::prelude::*;
use pcheck_form::dependent::SOURCE_FIELD_ID;
use pcheck_form::vehicle::WheelCount;

/// Wheels dropdown. Changing it rebuilds the vehicle type options.
#[component]
pub fn WheelsSelector() -> Element {
    let mut state = use_context::<FormState>();
    let form = state.form.read();
    let selected = form.wheels.clone();
    let class = format!("form-select {}", form.validity(Field::Wheels).class_name());
    drop(form);

    let on_change = move |evt: Event<FormData>| {
        state.form.write().set_wheels(evt.value());
    };
    let on_blur = move |_: Event<FocusData>| {
        state.form.write().validate(Field::Wheels);
    };

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: SOURCE_FIELD_ID,
                class: "form-label",
                "Number of Wheels"
            }
            select {
                id: SOURCE_FIELD_ID,
                name: Field::Wheels.name(),
                class: "{class}",
                required: true,
                onchange: on_change,
                onblur: on_blur,
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_empty(),
                    "Select wheels"
                }
                for wheels in WheelCount::ALL {
                    option {
                        value: wheels.value(),
                        selected: wheels.value() == selected,
                        "{wheels.label()}"
                    }
                }
            }
            div { class: "invalid-feedback", "Please select the number of wheels." }
        }
    }
}
