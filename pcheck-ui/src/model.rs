//! Plain model of the "new pollution check" form.
//!
//! Components never touch validity or options directly; they call the
//! methods here, which apply the same rules the server-rendered page uses.

use pcheck_form::alert::AlertSlot;
use pcheck_form::dependent::{rebuild, DependentSelect, SelectModel, Trigger};
use pcheck_form::validation::{
    check_submit, validate, ChoiceState, FieldSnapshot, SubmitOutcome, Validity,
    SUBMIT_ERROR_MESSAGE,
};
use pcheck_form::vehicle::{CheckDuration, WheelCount};

/// Required fields of the check form, in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    VehicleNo,
    Wheels,
    VehicleType,
    Duration,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::VehicleNo,
        Field::Wheels,
        Field::VehicleType,
        Field::Duration,
    ];

    /// Form field name, as posted to the server.
    pub fn name(&self) -> &'static str {
        match self {
            Field::VehicleNo => "vehicle_no",
            Field::Wheels => "wheels",
            Field::VehicleType => "vehicle_type",
            Field::Duration => "duration",
        }
    }
}

/// Position of `value` in a select whose option 0 is a disabled placeholder.
fn choice_index<'a>(values: impl IntoIterator<Item = &'a str>, value: &str) -> i32 {
    values
        .into_iter()
        .position(|v| v == value)
        .map_or(0, |i| i as i32 + 1)
}

fn placeholder_choice(value: &str, selected_index: i32) -> FieldSnapshot {
    FieldSnapshot::choice(
        true,
        value,
        ChoiceState {
            selected_index,
            placeholder_disabled: true,
        },
    )
}

#[derive(Debug, PartialEq, Clone)]
pub struct CheckFormModel {
    pub vehicle_no: String,
    pub wheels: String,
    pub vehicle_type: SelectModel,
    pub duration: String,
    vehicle_no_validity: Validity,
    wheels_validity: Validity,
    duration_validity: Validity,
    pub alert: AlertSlot,
    /// Set once a valid submit has been handed to the browser.
    pub submitting: bool,
}

impl Default for CheckFormModel {
    fn default() -> Self {
        Self {
            vehicle_no: String::new(),
            wheels: String::new(),
            vehicle_type: SelectModel::vehicle_type(),
            duration: String::new(),
            vehicle_no_validity: Validity::Unvalidated,
            wheels_validity: Validity::Unvalidated,
            duration_validity: Validity::Unvalidated,
            alert: AlertSlot::default(),
            submitting: false,
        }
    }
}

impl CheckFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, field: Field) -> FieldSnapshot {
        match field {
            Field::VehicleNo => FieldSnapshot::text(true, self.vehicle_no.clone()),
            Field::Wheels => placeholder_choice(
                &self.wheels,
                choice_index(WheelCount::ALL.iter().map(|w| w.value()), &self.wheels),
            ),
            Field::VehicleType => self.vehicle_type.snapshot(),
            Field::Duration => placeholder_choice(
                &self.duration,
                choice_index(CheckDuration::ALL.iter().map(|d| d.value()), &self.duration),
            ),
        }
    }

    pub fn validity(&self, field: Field) -> Validity {
        match field {
            Field::VehicleNo => self.vehicle_no_validity,
            Field::Wheels => self.wheels_validity,
            Field::VehicleType => self.vehicle_type.validity(),
            Field::Duration => self.duration_validity,
        }
    }

    fn set_validity(&mut self, field: Field, validity: Validity) {
        match field {
            Field::VehicleNo => self.vehicle_no_validity = validity,
            Field::Wheels => self.wheels_validity = validity,
            Field::VehicleType => self.vehicle_type.set_validity(validity),
            Field::Duration => self.duration_validity = validity,
        }
    }

    /// Validate one field (blur or change) and store the result.
    pub fn validate(&mut self, field: Field) -> Validity {
        let validity = validate(&self.snapshot(field));
        self.set_validity(field, validity);
        validity
    }

    pub fn set_vehicle_no(&mut self, value: String) {
        self.vehicle_no = value;
    }

    /// New wheels choice: validate it, then rebuild the vehicle type options.
    pub fn set_wheels(&mut self, value: String) {
        self.wheels = value;
        self.validate(Field::Wheels);
        rebuild(&mut self.vehicle_type, &self.wheels, Trigger::SourceChanged);
    }

    pub fn choose_vehicle_type(&mut self, value: &str) {
        self.vehicle_type.choose(value);
        self.validate(Field::VehicleType);
    }

    pub fn set_duration(&mut self, value: String) {
        self.duration = value;
        self.validate(Field::Duration);
    }

    /// Validate every field. A blocked submit raises the banner; a valid one
    /// puts the form into its submitting state.
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshots: Vec<_> = Field::ALL.iter().map(|f| self.snapshot(*f)).collect();
        let check = check_submit(&snapshots);
        for (field, validity) in Field::ALL.iter().zip(&check.validity) {
            self.set_validity(*field, *validity);
        }

        let outcome = check.outcome();
        match outcome {
            SubmitOutcome::Blocked => {
                for index in check.invalid() {
                    log::debug!("Input invalid: {}", Field::ALL[index].name());
                }
                self.alert.show(SUBMIT_ERROR_MESSAGE);
            }
            SubmitOutcome::Proceed => self.submitting = true,
        }
        outcome
    }
}
