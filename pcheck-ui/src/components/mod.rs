//! Reusable Dioxus RSX components for the check form.

mod duration_selector;
mod form_alert;
mod submit_button;
mod vehicle_number_input;
mod vehicle_type_selector;
mod wheels_selector;

pub use duration_selector::DurationSelector;
pub use form_alert::FormAlert;
pub use submit_button::SubmitButton;
pub use vehicle_number_input::VehicleNumberInput;
pub use vehicle_type_selector::VehicleTypeSelector;
pub use wheels_selector::WheelsSelector;
