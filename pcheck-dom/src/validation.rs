//! Required-field feedback and submit gating for every form on the page.

use crate::alert::show_form_error;
use crate::dom::{self, apply_validity, field_name, field_snapshot};
use pcheck_form::validation::{
    check_submit, initial_validity, validate, SubmitOutcome, Validity, LOADING_CLASS,
    REQUIRED_FIELDS_SELECTOR, SUBMIT_ERROR_MESSAGE,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement};

/// Validate one field and write its markers. Returns whether it passed.
pub fn validate_field(field: &Element) -> bool {
    let validity = validate(&field_snapshot(field));
    apply_validity(field, validity);
    validity == Validity::Valid
}

/// Attach blur/change/submit validation to every form in `document`.
pub fn init_form_validation(document: &Document) {
    let forms = match dom::query_all(document, "form") {
        Ok(forms) => forms,
        Err(err) => {
            log::error!("Could not look up forms: {}", err);
            return;
        }
    };
    log::info!("Found {} forms.", forms.len());

    for form in &forms {
        if let Err(err) = wire_form(document, form) {
            log::error!("Could not attach validation to form: {}", err);
        }
    }
}

fn wire_form(document: &Document, form: &Element) -> anyhow::Result<()> {
    let fields = dom::query_all_in(form, REQUIRED_FIELDS_SELECTOR)?;
    log::info!("Found {} required inputs/selects in a form.", fields.len());

    for field in &fields {
        for event in ["blur", "change"] {
            let target = field.clone();
            dom::listen(field, event, move |_| {
                validate_field(&target);
            })?;
        }
        apply_validity(field, initial_validity(&field_snapshot(field)));
    }

    let document = document.clone();
    let submitted = form.clone();
    dom::listen(form, "submit", move |event| {
        on_submit(&document, &submitted, &fields, &event);
    })
}

fn on_submit(document: &Document, form: &Element, fields: &[Element], event: &Event) {
    log::debug!("Form submit event triggered.");

    let snapshots: Vec<_> = fields.iter().map(field_snapshot).collect();
    let check = check_submit(&snapshots);
    for (field, validity) in fields.iter().zip(&check.validity) {
        apply_validity(field, *validity);
    }

    match check.outcome() {
        SubmitOutcome::Blocked => {
            for index in check.invalid() {
                log::debug!("Input invalid: {}", field_name(&fields[index]));
            }
            event.prevent_default();
            log::debug!("Form submission prevented due to invalid fields.");
            if let Err(err) = show_form_error(document, form, SUBMIT_ERROR_MESSAGE) {
                log::error!("Could not show form error: {}", err);
            }
        }
        SubmitOutcome::Proceed => {
            log::debug!("Form is valid, applying loading state.");
            let _ = form.class_list().add_1(LOADING_CLASS);
            if let Ok(Some(button)) = form.query_selector("button[type=\"submit\"]") {
                if let Ok(button) = button.dyn_into::<HtmlButtonElement>() {
                    button.set_disabled(true);
                }
            }
        }
    }
}
