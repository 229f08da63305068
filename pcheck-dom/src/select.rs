//! `HtmlSelectElement` as a [`DependentSelect`].
//!
//! Option index 0 of the element is the placeholder and is never touched;
//! plan indices are shifted by one when applied.

use crate::dom::{apply_validity, js_err};
use pcheck_form::dependent::{DependentSelect, Selection};
use pcheck_form::options::{ChoiceOption, OptionOp};
use pcheck_form::validation::Validity;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

#[derive(Debug)]
pub struct DomSelect {
    select: HtmlSelectElement,
}

impl DomSelect {
    pub fn new(select: HtmlSelectElement) -> Self {
        Self { select }
    }

    fn append(&self, option: &ChoiceOption) -> anyhow::Result<()> {
        let element = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)
            .map_err(js_err)?;
        self.select
            .add_with_html_option_element(&element)
            .map_err(js_err)?;
        log::debug!("Added option: {} {}", option.value, option.label);
        Ok(())
    }
}

impl DependentSelect for DomSelect {
    fn options(&self) -> Vec<ChoiceOption> {
        (1..self.select.length())
            .filter_map(|i| self.select.item(i))
            .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| ChoiceOption::new(option.value(), option.text()))
            .collect()
    }

    fn selected_value(&self) -> Option<String> {
        if self.select.selected_index() <= 0 {
            return None;
        }
        Some(self.select.value()).filter(|value| !value.is_empty())
    }

    fn apply_op(&mut self, op: &OptionOp) {
        match op {
            OptionOp::Remove { index } => self.select.remove_with_index(*index as i32 + 1),
            OptionOp::Append(option) => {
                if let Err(err) = self.append(option) {
                    log::error!("Could not add vehicle type option {}: {}", option.value, err);
                }
            }
        }
    }

    fn select(&mut self, selection: Selection) {
        match selection.value() {
            Some(value) => self.select.set_value(value),
            None => self.select.set_selected_index(0),
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.select.set_disabled(disabled);
    }

    fn set_validity(&mut self, validity: Validity) {
        apply_validity(&self.select, validity);
    }
}
