//! Error banner placed directly before a form.

use crate::dom::js_err;
use anyhow::Context;
use pcheck_form::alert::{
    ALERT_CLASS, ALERT_CONTAINER_CLASS, ALERT_CONTAINER_SELECTOR, ALERT_SELECTOR,
    CLOSE_BUTTON_CLASS,
};
use web_sys::{Document, Element, Node};

/// The banner container just before `form`, created if it is not there yet.
fn alert_container(document: &Document, form: &Element) -> anyhow::Result<Element> {
    if let Some(existing) = form.previous_element_sibling() {
        if existing.matches(ALERT_CONTAINER_SELECTOR).unwrap_or(false) {
            return Ok(existing);
        }
    }

    let container = document.create_element("div").map_err(js_err)?;
    container.set_class_name(ALERT_CONTAINER_CLASS);
    let parent = form.parent_node().context("form is not attached to the page")?;
    let anchor: &Node = form;
    parent
        .insert_before(&container, Some(anchor))
        .map_err(js_err)?;
    Ok(container)
}

/// Show `message` above `form`, replacing any banner already there.
pub fn show_form_error(document: &Document, form: &Element, message: &str) -> anyhow::Result<()> {
    let container = alert_container(document, form)?;

    if let Some(existing) = container.query_selector(ALERT_SELECTOR).map_err(js_err)? {
        existing.remove();
    }

    let alert = document.create_element("div").map_err(js_err)?;
    alert.set_class_name(ALERT_CLASS);
    alert.set_attribute("role", "alert").map_err(js_err)?;
    alert.append_with_str_1(message).map_err(js_err)?;

    let close = document.create_element("button").map_err(js_err)?;
    close.set_attribute("type", "button").map_err(js_err)?;
    close.set_class_name(CLOSE_BUTTON_CLASS);
    close.set_attribute("data-bs-dismiss", "alert").map_err(js_err)?;
    close.set_attribute("aria-label", "Close").map_err(js_err)?;
    alert.append_child(&close).map_err(js_err)?;

    container.append_child(&alert).map_err(js_err)?;
    Ok(())
}
