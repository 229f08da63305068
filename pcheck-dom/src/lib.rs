//! Progressive enhancement for the server-rendered pollution check pages.
//!
//! The pages are plain HTML forms and dashboards; this crate attaches the
//! behavior decided by `pcheck-form` to them. Nothing is registered on load
//! by itself: an entry point calls [`init`] once with the page's `Document`.
//!
//! This crate provides:
//! - `config`: `EnhanceConfig`, read from an optional JSON block in the page
//! - `dom`: small `web-sys` helpers (queries, listeners, validity classes)
//! - `select`: `DomSelect`, the `HtmlSelectElement` side of the rebuild plan
//! - `validation`: required-field feedback and submit gating
//! - `dependent`: the wheels -> vehicle type dependency
//! - `alert`: the form error banner
//! - `animation`: card/chart reveals and the total-sales counter
//!
//! Every `init_*` function swallows and logs its own failures, so a page
//! missing one piece still gets the rest.

pub mod alert;
pub mod animation;
pub mod config;
pub mod dependent;
pub mod dom;
pub mod select;
pub mod validation;

use config::EnhanceConfig;
use web_sys::Document;

/// Wire everything on `document`, using the page's config block if present.
pub fn init(document: &Document) {
    let config = EnhanceConfig::load(document);
    init_with_config(document, &config);
}

/// Wire everything on `document` with an explicit config.
///
/// Validation is attached before the wheels dependency so the dependency's
/// initial rebuild sees fields in their load-time state.
pub fn init_with_config(document: &Document, config: &EnhanceConfig) {
    validation::init_form_validation(document);
    dependent::init_form_dependencies(document, config);
    animation::init_dashboard_animations(document, config);
    animation::init_chart_interactions(document, config);
}
