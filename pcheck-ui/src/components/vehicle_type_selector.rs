//! Vehicle type dropdown whose options follow the wheels selection.

use crate::model::Field;
use crate::state::FormState;
use dioxus::prelude::*;
use pcheck_form::dependent::DEPENDENT_FIELD_ID;

/// Vehicle type dropdown. Options, selection and the disabled flag all come
/// from the rebuilt `SelectModel`.
#[component]
pub fn VehicleTypeSelector() -> Element {
    let mut state = use_context::<FormState>();
    let form = state.form.read();
    let field = form.vehicle_type.clone();
    let class = format!("form-select {}", form.validity(Field::VehicleType).class_name());
    drop(form);

    let selected_index = field.selected_index();
    let placeholder = field.placeholder().clone();

    let on_change = move |evt: Event<FormData>| {
        state.form.write().choose_vehicle_type(&evt.value());
    };
    let on_blur = move |_: Event<FocusData>| {
        state.form.write().validate(Field::VehicleType);
    };

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: DEPENDENT_FIELD_ID,
                class: "form-label",
                "Vehicle Type"
            }
            select {
                id: DEPENDENT_FIELD_ID,
                name: Field::VehicleType.name(),
                class: "{class}",
                required: true,
                disabled: field.is_disabled(),
                onchange: on_change,
                onblur: on_blur,
                option {
                    value: "{placeholder.value}",
                    disabled: true,
                    selected: selected_index == 0,
                    "{placeholder.label}"
                }
                for (i, option) in field.options_slice().iter().enumerate() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: selected_index == i + 1,
                        "{option.label}"
                    }
                }
            }
            div { class: "invalid-feedback", "Please select the vehicle type." }
        }
    }
}
