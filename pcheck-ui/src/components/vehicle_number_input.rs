//! Vehicle registration number input.

use crate::model::Field;
use crate::state::FormState;
use dioxus::prelude::*;

#[component]
pub fn VehicleNumberInput() -> Element {
    let mut state = use_context::<FormState>();
    let form = state.form.read();
    let value = form.vehicle_no.clone();
    let class = format!("form-control {}", form.validity(Field::VehicleNo).class_name());
    drop(form);

    let on_input = move |evt: Event<FormData>| {
        state.form.write().set_vehicle_no(evt.value());
    };
    let on_change = move |_: Event<FormData>| {
        state.form.write().validate(Field::VehicleNo);
    };
    let on_blur = move |_: Event<FocusData>| {
        state.form.write().validate(Field::VehicleNo);
    };

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: "vehicle_no",
                class: "form-label",
                "Vehicle Number"
            }
            input {
                id: "vehicle_no",
                name: Field::VehicleNo.name(),
                r#type: "text",
                class: "{class}",
                placeholder: "e.g. MH12AB1234",
                required: true,
                value: "{value}",
                oninput: on_input,
                onchange: on_change,
                onblur: on_blur,
            }
            div { class: "invalid-feedback", "Vehicle number is required." }
        }
    }
}
