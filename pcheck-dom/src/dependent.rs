//! Keeps `#vehicle_type` in step with `#wheels`.

use crate::config::EnhanceConfig;
use crate::dom;
use crate::select::DomSelect;
use pcheck_form::dependent::{rebuild, Trigger};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlSelectElement};

/// Look up a select by id, logging once if it is missing or is not a select.
fn select_by_id(document: &Document, id: &str, role: &str) -> Option<HtmlSelectElement> {
    let Some(element) = document.get_element_by_id(id) else {
        log::error!("{} select element ('#{}') not found!", role, id);
        return None;
    };
    match element.dyn_into::<HtmlSelectElement>() {
        Ok(select) => Some(select),
        Err(_) => {
            log::error!("{} element ('#{}') is not a select", role, id);
            None
        }
    }
}

/// Rebuild the dependent select for `source`.
///
/// A page without the dependent select is left alone; the condition is logged.
pub fn update_vehicle_type_options(
    document: &Document,
    config: &EnhanceConfig,
    source: &str,
    trigger: Trigger,
) {
    if let Some(select) = select_by_id(document, &config.dependent_field_id, "Vehicle type") {
        rebuild(&mut DomSelect::new(select), source, trigger);
    }
}

/// Rebuild the dependent select now and whenever the source select changes.
pub fn init_form_dependencies(document: &Document, config: &EnhanceConfig) {
    let wheels = select_by_id(document, &config.source_field_id, "Wheels");
    let vehicle_type = select_by_id(document, &config.dependent_field_id, "Vehicle type");
    let (Some(wheels), Some(_)) = (wheels, vehicle_type) else {
        return;
    };

    log::info!(
        "Initializing form dependencies. Initial wheels value: {:?}",
        wheels.value()
    );

    let source = wheels.clone();
    let listen_document = document.clone();
    let listen_config = config.clone();
    let listener = dom::listen(&wheels, "change", move |_| {
        update_vehicle_type_options(
            &listen_document,
            &listen_config,
            &source.value(),
            Trigger::SourceChanged,
        );
    });
    if let Err(err) = listener {
        log::error!("Could not watch wheels changes: {}", err);
    }

    update_vehicle_type_options(document, config, &wheels.value(), Trigger::PageLoad);
}
