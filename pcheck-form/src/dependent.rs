//! Vehicle type options that follow the wheels selection.
//!
//! The vehicle type select always offers exactly [`options_for`] the current
//! wheels value, behind a disabled placeholder at index 0:
//!
//! | wheels | options | selection |
//! |---|---|---|
//! | `"2"` | petrol | petrol, valid |
//! | `"3"`, `"4"` | petrol, diesel | prior choice restored and valid if offered, else placeholder with no markers |
//! | other | none | placeholder, disabled, no markers |
//!
//! A rebuild caused by the user changing wheels first drops the current
//! selection (see [`Trigger::SourceChanged`]), so only a page-load rebuild
//! can restore a choice.

use crate::options::{apply_ops, diff_options, ChoiceOption, OptionOp};
use crate::validation::{ChoiceState, FieldSnapshot, Validity};
use crate::vehicle::{options_for, FuelType};

/// Element id of the wheels select.
pub const SOURCE_FIELD_ID: &str = "wheels";
/// Element id of the vehicle type select.
pub const DEPENDENT_FIELD_ID: &str = "vehicle_type";

/// What the dependent field ends up showing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Selection {
    Placeholder,
    Value(FuelType),
}

impl Selection {
    pub fn value(&self) -> Option<&'static str> {
        match self {
            Selection::Placeholder => None,
            Selection::Value(fuel) => Some(fuel.value()),
        }
    }
}

/// Why a rebuild is running.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Trigger {
    /// Initial page load; a server-repopulated choice may be restored.
    PageLoad,
    /// The user picked a different wheels value; the old choice is discarded.
    SourceChanged,
}

/// Declarative result of one rebuild.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RebuildPlan {
    pub ops: Vec<OptionOp>,
    pub selection: Selection,
    pub disabled: bool,
    pub validity: Validity,
}

/// Work out how the dependent field must change for `source`.
///
/// `current` are the field's options after the placeholder and `prior` the
/// value it had selected, if any.
pub fn plan_rebuild(current: &[ChoiceOption], prior: Option<&str>, source: &str) -> RebuildPlan {
    let offered = options_for(source);
    let target: Vec<ChoiceOption> = offered.iter().copied().map(ChoiceOption::from).collect();
    let ops = diff_options(current, &target);

    let (selection, validity) = match offered {
        [] => (Selection::Placeholder, Validity::Unvalidated),
        [only] => (Selection::Value(*only), Validity::Valid),
        _ => match prior.and_then(FuelType::from_value) {
            Some(fuel) if offered.contains(&fuel) => (Selection::Value(fuel), Validity::Valid),
            _ => (Selection::Placeholder, Validity::Unvalidated),
        },
    };

    RebuildPlan {
        ops,
        selection,
        disabled: offered.is_empty(),
        validity,
    }
}

/// A single-choice field a [`RebuildPlan`] can be applied to.
pub trait DependentSelect {
    /// Options after the placeholder, in order.
    fn options(&self) -> Vec<ChoiceOption>;
    /// Selected value, or `None` while the placeholder is selected.
    fn selected_value(&self) -> Option<String>;
    fn apply_op(&mut self, op: &OptionOp);
    fn select(&mut self, selection: Selection);
    fn set_disabled(&mut self, disabled: bool);
    fn set_validity(&mut self, validity: Validity);
}

/// Bring `field` in line with the wheels value `source`.
///
/// Idempotent: running it again with the same `source` changes nothing.
pub fn rebuild<F: DependentSelect + ?Sized>(field: &mut F, source: &str, trigger: Trigger) {
    log::debug!("Updating vehicle type options for wheels: {:?}", source);

    if trigger == Trigger::SourceChanged {
        field.select(Selection::Placeholder);
        field.set_validity(Validity::Unvalidated);
    }

    let prior = field.selected_value();
    let plan = plan_rebuild(&field.options(), prior.as_deref(), source);

    for op in &plan.ops {
        field.apply_op(op);
    }
    field.select(plan.selection);
    field.set_disabled(plan.disabled);
    field.set_validity(plan.validity);

    match plan.selection {
        Selection::Value(fuel) if prior.as_deref() == Some(fuel.value()) => {
            log::debug!("Restored previous selection: {}", fuel.value());
        }
        Selection::Value(fuel) => log::debug!("Auto-selected '{}'", fuel.value()),
        Selection::Placeholder => {}
    }
}

/// In-memory single-choice field with a disabled placeholder.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SelectModel {
    placeholder: ChoiceOption,
    options: Vec<ChoiceOption>,
    /// Index into `options`; `None` means the placeholder is selected.
    selected: Option<usize>,
    disabled: bool,
    validity: Validity,
}

impl SelectModel {
    /// Empty, disabled field showing only `placeholder`.
    pub fn new(placeholder: ChoiceOption) -> Self {
        Self {
            placeholder,
            options: Vec::new(),
            selected: None,
            disabled: true,
            validity: Validity::Unvalidated,
        }
    }

    /// The vehicle type field as the check form renders it before any wheels are chosen.
    pub fn vehicle_type() -> Self {
        Self::new(ChoiceOption::new("", "Select vehicle type"))
    }

    pub fn placeholder(&self) -> &ChoiceOption {
        &self.placeholder
    }

    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn options_slice(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// `selectedIndex` as a browser reports it: 0 is the placeholder.
    pub fn selected_index(&self) -> usize {
        self.selected.map_or(0, |i| i + 1)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Manual choice by the user. Unknown values select the placeholder.
    pub fn choose(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o.value == value);
    }

    /// Snapshot for the validator; the field is always required on the check form.
    pub fn snapshot(&self) -> FieldSnapshot {
        let value = match self.selected {
            Some(i) => self.options[i].value.clone(),
            None => self.placeholder.value.clone(),
        };
        FieldSnapshot::choice(
            true,
            value,
            ChoiceState {
                selected_index: self.selected_index() as i32,
                placeholder_disabled: true,
            },
        )
    }
}

impl DependentSelect for SelectModel {
    fn options(&self) -> Vec<ChoiceOption> {
        self.options.clone()
    }

    fn selected_value(&self) -> Option<String> {
        self.selected.map(|i| self.options[i].value.clone())
    }

    fn apply_op(&mut self, op: &OptionOp) {
        if let OptionOp::Remove { index } = op {
            self.selected = match self.selected {
                Some(s) if s == *index => None,
                Some(s) if s > *index => Some(s - 1),
                other => other,
            };
        }
        apply_ops(&mut self.options, std::slice::from_ref(op));
    }

    fn select(&mut self, selection: Selection) {
        self.selected = selection
            .value()
            .and_then(|value| self.options.iter().position(|o| o.value == value));
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn set_validity(&mut self, validity: Validity) {
        self.validity = validity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_after(steps: &[(&str, Trigger)]) -> SelectModel {
        let mut field = SelectModel::vehicle_type();
        for (source, trigger) in steps {
            rebuild(&mut field, source, *trigger);
        }
        field
    }

    #[test]
    fn unsupported_sources_leave_only_the_placeholder() {
        for source in ["", "1", "5", "x"] {
            let mut field = field_after(&[("4", Trigger::SourceChanged)]);
            field.choose("diesel");
            rebuild(&mut field, source, Trigger::SourceChanged);
            assert!(field.option_values().is_empty(), "source {:?}", source);
            assert!(field.is_disabled(), "source {:?} should disable", source);
            assert_eq!(field.selected_index(), 0);
            assert_eq!(field.validity(), Validity::Unvalidated);
        }
    }

    #[test]
    fn two_wheels_auto_selects_petrol() {
        let field = field_after(&[("2", Trigger::PageLoad)]);
        assert_eq!(field.option_values(), vec!["petrol"]);
        assert_eq!(field.selected_value().as_deref(), Some("petrol"));
        assert!(!field.is_disabled());
        assert_eq!(field.validity(), Validity::Valid);
    }

    #[test]
    fn three_and_four_wheels_offer_petrol_and_diesel() {
        for source in ["3", "4"] {
            let field = field_after(&[(source, Trigger::SourceChanged)]);
            assert_eq!(field.option_values(), vec!["petrol", "diesel"]);
            assert_eq!(field.selected_index(), 0, "no prior choice to restore");
            assert!(!field.is_disabled());
            assert_eq!(field.validity(), Validity::Unvalidated);
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        for source in ["", "2", "3", "4", "9"] {
            for trigger in [Trigger::PageLoad, Trigger::SourceChanged] {
                let mut once = field_after(&[("4", Trigger::SourceChanged)]);
                once.choose("diesel");
                let mut twice = once.clone();
                rebuild(&mut once, source, trigger);
                rebuild(&mut twice, source, trigger);
                rebuild(&mut twice, source, trigger);
                assert_eq!(once, twice, "source {:?} trigger {:?}", source, trigger);
            }
        }
    }

    #[test]
    fn repeated_rebuilds_never_accumulate_options() {
        let mut field = SelectModel::vehicle_type();
        for source in ["3", "4", "3", "2", "4", "4"] {
            rebuild(&mut field, source, Trigger::SourceChanged);
        }
        assert_eq!(field.option_values(), vec!["petrol", "diesel"]);
    }

    #[test]
    fn source_change_drops_prior_choice() {
        let mut field = field_after(&[("4", Trigger::SourceChanged)]);
        field.choose("diesel");
        rebuild(&mut field, "3", Trigger::SourceChanged);
        assert_eq!(field.selected_index(), 0, "diesel must not carry over to 3");
        assert_eq!(field.validity(), Validity::Unvalidated);

        rebuild(&mut field, "4", Trigger::SourceChanged);
        assert_eq!(field.selected_index(), 0, "diesel must not come back on 4");
    }

    #[test]
    fn page_load_restores_repopulated_choice() {
        let mut field = field_after(&[("4", Trigger::SourceChanged)]);
        field.choose("diesel");
        rebuild(&mut field, "3", Trigger::PageLoad);
        assert_eq!(field.selected_value().as_deref(), Some("diesel"));
        assert_eq!(field.validity(), Validity::Valid);
    }

    #[test]
    fn empty_then_two_wheels() {
        let field = field_after(&[("", Trigger::PageLoad), ("2", Trigger::SourceChanged)]);
        assert_eq!(field.placeholder().value, "");
        assert_eq!(field.option_values(), vec!["petrol"]);
        assert_eq!(field.selected_value().as_deref(), Some("petrol"));
        assert!(!field.is_disabled());
        assert_eq!(field.validity(), Validity::Valid);
    }

    #[test]
    fn diesel_four_wheeler_switched_to_two_wheels() {
        let mut field = field_after(&[("4", Trigger::SourceChanged)]);
        field.choose("diesel");
        rebuild(&mut field, "2", Trigger::SourceChanged);
        assert_eq!(field.option_values(), vec!["petrol"]);
        assert_eq!(field.selected_value().as_deref(), Some("petrol"));
        assert_eq!(field.validity(), Validity::Valid);
    }

    #[test]
    fn plan_for_two_wheels_from_four_removes_diesel() {
        let current: Vec<ChoiceOption> = vec![FuelType::Petrol.into(), FuelType::Diesel.into()];
        let plan = plan_rebuild(&current, Some("diesel"), "2");
        assert_eq!(plan.ops, vec![OptionOp::Remove { index: 1 }]);
        assert_eq!(plan.selection, Selection::Value(FuelType::Petrol));
        assert!(!plan.disabled);
        assert_eq!(plan.validity, Validity::Valid);
    }

    #[test]
    fn plan_ignores_prior_not_on_offer() {
        let plan = plan_rebuild(&[], Some("electric"), "3");
        assert_eq!(plan.selection, Selection::Placeholder);
        assert_eq!(plan.validity, Validity::Unvalidated);
    }

    #[test]
    fn snapshot_reports_placeholder_as_no_value() {
        let field = field_after(&[("3", Trigger::SourceChanged)]);
        let snapshot = field.snapshot();
        assert!(!snapshot.has_value());
        assert_eq!(crate::validation::validate(&snapshot), Validity::Invalid);
    }
}
