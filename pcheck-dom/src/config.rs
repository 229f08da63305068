//! Page-level configuration.
//!
//! Pages may embed a JSON block to override ids, selectors, and timings:
//!
//! ```html
//! <script type="application/json" id="form-enhance-config">
//!   { "counter_duration_ms": 800, "card_selector": ".summary-card" }
//! </script>
//! ```
//!
//! Any field left out keeps its default.

use pcheck_form::animation::{RevealKind, RevealTiming, COUNTER_DURATION_MS};
use pcheck_form::dependent::{DEPENDENT_FIELD_ID, SOURCE_FIELD_ID};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "form-enhance-config";

/// Default selector for the animated total-sales figure.
pub const COUNTER_SELECTOR: &str = ".summary-card .card-body h3.card-title";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Id of the wheels select.
    pub source_field_id: String,
    /// Id of the vehicle type select.
    pub dependent_field_id: String,
    pub card_selector: String,
    pub card_timing: RevealTiming,
    pub chart_selector: String,
    pub chart_timing: RevealTiming,
    pub counter_selector: String,
    pub counter_duration_ms: f64,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            source_field_id: SOURCE_FIELD_ID.to_string(),
            dependent_field_id: DEPENDENT_FIELD_ID.to_string(),
            card_selector: RevealKind::Card.default_selector().to_string(),
            card_timing: RevealKind::Card.default_timing(),
            chart_selector: RevealKind::Chart.default_selector().to_string(),
            chart_timing: RevealKind::Chart.default_timing(),
            counter_selector: COUNTER_SELECTOR.to_string(),
            counter_duration_ms: COUNTER_DURATION_MS,
        }
    }
}

impl EnhanceConfig {
    /// Parse a config block. Blank input is the default config.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read the page's config block, falling back to defaults when it is
    /// missing or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring malformed #{} ({}); using defaults",
                    CONFIG_ELEMENT_ID,
                    err
                );
                Self::default()
            }
        }
    }
}
