//! Small `web-sys` helpers shared by the enhancement modules.

use pcheck_form::validation::{ChoiceState, FieldSnapshot, Validity};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, NodeList,
};

/// Turn a thrown `JsValue` into an `anyhow::Error`.
pub fn js_err(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow::anyhow!("{}", message),
        None => anyhow::anyhow!("{:?}", value),
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `document.querySelectorAll(selector)` as a vector of elements.
pub fn query_all(document: &Document, selector: &str) -> anyhow::Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector).map_err(js_err)?))
}

/// `root.querySelectorAll(selector)` as a vector of elements.
pub fn query_all_in(root: &Element, selector: &str) -> anyhow::Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector).map_err(js_err)?))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Write the validity markers for `validity` onto `element`.
pub fn apply_validity(element: &Element, validity: Validity) {
    let classes = element.class_list();
    for class in validity.classes_to_remove() {
        let _ = classes.remove_1(class);
    }
    for class in validity.classes_to_add() {
        let _ = classes.add_1(class);
    }
}

/// Read the validity markers currently on `element`.
pub fn current_validity(element: &Element) -> Validity {
    let classes = element.class_list();
    if classes.contains(pcheck_form::validation::INVALID_CLASS) {
        Validity::Invalid
    } else if classes.contains(pcheck_form::validation::VALID_CLASS) {
        Validity::Valid
    } else {
        Validity::Unvalidated
    }
}

/// Capture what the validator needs from an `<input>` or `<select>`.
pub fn field_snapshot(element: &Element) -> FieldSnapshot {
    let required = element.has_attribute("required");

    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        if select.type_() == "select-one" {
            let placeholder_disabled = select
                .item(0)
                .and_then(|option| option.dyn_into::<HtmlOptionElement>().ok())
                .is_some_and(|option| option.disabled());
            return FieldSnapshot::choice(
                required,
                select.value(),
                ChoiceState {
                    selected_index: select.selected_index(),
                    placeholder_disabled,
                },
            );
        }
        return FieldSnapshot::text(required, select.value());
    }

    let value = match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => element.get_attribute("value").unwrap_or_default(),
    };
    FieldSnapshot::text(required, value)
}

/// Best name for a field in log lines: id, then name, then tag.
pub fn field_name(element: &Element) -> String {
    let id = element.id();
    if !id.is_empty() {
        return id;
    }
    element
        .get_attribute("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| element.tag_name().to_lowercase())
}
