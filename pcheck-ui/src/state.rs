//! Application state managed via Dioxus context.
//!
//! `FormState` is provided once via `use_context_provider`. Child components
//! retrieve it with `use_context::<FormState>()` and edit the form through
//! `CheckFormModel` methods so the validation rules stay in one place.

use crate::model::CheckFormModel;
use dioxus::prelude::*;

/// Shared state for the check form app.
#[derive(Clone, Copy)]
pub struct FormState {
    /// The form being filled in
    pub form: Signal<CheckFormModel>,
}

impl FormState {
    /// Create a new FormState with an empty form.
    pub fn new() -> Self {
        Self {
            form: Signal::new(CheckFormModel::new()),
        }
    }
}
