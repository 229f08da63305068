//! Required-field validation and submit gating.
//!
//! Validation status is never stored by this module. Adapters take a
//! [`FieldSnapshot`] of the live field, ask for a [`Validity`], and write
//! the resulting classes back.

/// Class set on a field that passed validation.
pub const VALID_CLASS: &str = "is-valid";
/// Class set on a field that failed validation.
pub const INVALID_CLASS: &str = "is-invalid";
/// Class set on a form while its submission is in flight.
pub const LOADING_CLASS: &str = "loading";
/// Selector for the fields the validator watches.
pub const REQUIRED_FIELDS_SELECTOR: &str = "input[required], select[required]";
/// Banner text shown when a submit is blocked.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Please fill all required fields correctly before submitting.";

/// Validation status of a field, as shown by its CSS markers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Validity {
    /// Neither marker present.
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

impl Validity {
    /// Marker classes to add for this status.
    pub fn classes_to_add(&self) -> &'static [&'static str] {
        match self {
            Validity::Unvalidated => &[],
            Validity::Valid => &[VALID_CLASS],
            Validity::Invalid => &[INVALID_CLASS],
        }
    }

    /// Marker classes to remove for this status.
    pub fn classes_to_remove(&self) -> &'static [&'static str] {
        match self {
            Validity::Unvalidated => &[VALID_CLASS, INVALID_CLASS],
            Validity::Valid => &[INVALID_CLASS],
            Validity::Invalid => &[VALID_CLASS],
        }
    }

    /// Space separated class string, for renderers that own the whole attribute.
    pub fn class_name(&self) -> &'static str {
        match self {
            Validity::Unvalidated => "",
            Validity::Valid => VALID_CLASS,
            Validity::Invalid => INVALID_CLASS,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid)
    }
}

/// Selection state of a single-choice field.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ChoiceState {
    /// `selectedIndex`; -1 when nothing is selected.
    pub selected_index: i32,
    /// Whether option 0 is a disabled placeholder.
    pub placeholder_disabled: bool,
}

impl ChoiceState {
    pub fn on_placeholder(&self) -> bool {
        self.selected_index == 0 && self.placeholder_disabled
    }
}

/// What the validator needs to know about a field.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldSnapshot {
    pub required: bool,
    pub value: String,
    /// Present for single-choice fields only.
    pub choice: Option<ChoiceState>,
}

impl FieldSnapshot {
    pub fn text(required: bool, value: impl Into<String>) -> Self {
        Self {
            required,
            value: value.into(),
            choice: None,
        }
    }

    pub fn choice(required: bool, value: impl Into<String>, choice: ChoiceState) -> Self {
        Self {
            required,
            value: value.into(),
            choice: Some(choice),
        }
    }

    /// True when the field holds something other than nothing or the placeholder.
    pub fn has_value(&self) -> bool {
        !self.value.is_empty() && !self.choice.is_some_and(|c| c.on_placeholder())
    }
}

/// Validate a field. Never returns [`Validity::Unvalidated`].
///
/// Optional fields are always valid. A required field needs a non-empty value,
/// and a required select must not be on its disabled placeholder.
pub fn validate(field: &FieldSnapshot) -> Validity {
    if !field.required || field.has_value() {
        Validity::Valid
    } else {
        Validity::Invalid
    }
}

/// Status a field starts with when the page loads.
///
/// Pre-filled fields are validated straight away; empty ones show no markers.
pub fn initial_validity(field: &FieldSnapshot) -> Validity {
    if field.has_value() {
        validate(field)
    } else {
        Validity::Unvalidated
    }
}

/// Whether a submit may proceed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SubmitOutcome {
    Proceed,
    Blocked,
}

/// Result of validating every required field of a form on submit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SubmitCheck {
    /// Status for each field, in the order given to [`check_submit`].
    pub validity: Vec<Validity>,
}

impl SubmitCheck {
    /// Indices of the fields that failed.
    pub fn invalid(&self) -> impl Iterator<Item = usize> + '_ {
        self.validity
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_invalid())
            .map(|(i, _)| i)
    }

    pub fn outcome(&self) -> SubmitOutcome {
        if self.validity.iter().any(Validity::is_invalid) {
            SubmitOutcome::Blocked
        } else {
            SubmitOutcome::Proceed
        }
    }
}

/// Validate all fields; every field is checked even after the first failure.
pub fn check_submit(fields: &[FieldSnapshot]) -> SubmitCheck {
    SubmitCheck {
        validity: fields.iter().map(validate).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(index: i32, value: &str) -> FieldSnapshot {
        FieldSnapshot::choice(
            true,
            value,
            ChoiceState {
                selected_index: index,
                placeholder_disabled: true,
            },
        )
    }

    #[test]
    fn empty_required_text_is_invalid() {
        assert_eq!(validate(&FieldSnapshot::text(true, "")), Validity::Invalid);
        assert_eq!(
            validate(&FieldSnapshot::text(true, "MH12AB1234")),
            Validity::Valid
        );
    }

    #[test]
    fn optional_fields_are_always_valid() {
        assert_eq!(validate(&FieldSnapshot::text(false, "")), Validity::Valid);
    }

    #[test]
    fn placeholder_selection_is_invalid_even_with_a_value() {
        // A placeholder with a non-empty value attribute still counts as no value.
        assert_eq!(validate(&select(0, "choose")), Validity::Invalid);
        assert_eq!(validate(&select(1, "petrol")), Validity::Valid);
    }

    #[test]
    fn enabled_first_option_is_a_real_value() {
        let field = FieldSnapshot::choice(
            true,
            "2",
            ChoiceState {
                selected_index: 0,
                placeholder_disabled: false,
            },
        );
        assert_eq!(validate(&field), Validity::Valid);
    }

    #[test]
    fn empty_fields_start_unvalidated() {
        assert_eq!(
            initial_validity(&FieldSnapshot::text(true, "")),
            Validity::Unvalidated
        );
        assert_eq!(initial_validity(&select(0, "")), Validity::Unvalidated);
        assert_eq!(initial_validity(&select(2, "diesel")), Validity::Valid);
    }

    #[test]
    fn validity_markers_are_mutually_exclusive() {
        for v in [Validity::Unvalidated, Validity::Valid, Validity::Invalid] {
            for class in v.classes_to_add() {
                assert!(
                    !v.classes_to_remove().contains(class),
                    "{:?} both adds and removes {}",
                    v,
                    class
                );
            }
            assert_eq!(
                v.classes_to_add().len() + v.classes_to_remove().len(),
                2,
                "{:?} must decide both markers",
                v
            );
        }
    }

    #[test]
    fn submit_with_one_empty_field_is_blocked_on_that_field_only() {
        let fields = vec![
            FieldSnapshot::text(true, "MH12AB1234"),
            select(1, "4"),
            select(0, ""),
            select(1, "six_months"),
        ];
        let check = check_submit(&fields);
        assert_eq!(check.outcome(), SubmitOutcome::Blocked);
        assert_eq!(check.invalid().collect::<Vec<_>>(), vec![2]);
        assert_eq!(check.validity[0], Validity::Valid);
        assert_eq!(check.validity[3], Validity::Valid);
    }

    #[test]
    fn complete_form_proceeds() {
        let check = check_submit(&[FieldSnapshot::text(true, "KA01"), select(1, "2")]);
        assert_eq!(check.outcome(), SubmitOutcome::Proceed);
        assert_eq!(check.invalid().count(), 0);
    }
}
