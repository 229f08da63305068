//! DOM-free model of the pollution check form.
//!
//! Everything the page does is decided here and then applied by a thin
//! adapter (`pcheck-dom` for server-rendered pages, `pcheck-ui` for the
//! Dioxus form). This crate provides:
//! - `vehicle`: wheel counts, fuel types, and the option policy table
//! - `options`: option lists and the declarative diff between them
//! - `dependent`: the vehicle type rebuild state machine
//! - `validation`: required-field checks and submit gating
//! - `alert`: the form error banner
//! - `animation`: reveal stagger timing and the total-sales counter tween
//!
//! # Usage
//!
//! ```rust
//! use pcheck_form::dependent::{rebuild, DependentSelect, SelectModel, Trigger};
//! use pcheck_form::validation::Validity;
//!
//! let mut vehicle_type = SelectModel::vehicle_type();
//! rebuild(&mut vehicle_type, "2", Trigger::SourceChanged);
//!
//! assert_eq!(vehicle_type.option_values(), vec!["petrol"]);
//! assert_eq!(vehicle_type.selected_value().as_deref(), Some("petrol"));
//! assert_eq!(vehicle_type.validity(), Validity::Valid);
//! ```

pub mod alert;
pub mod animation;
pub mod dependent;
pub mod options;
pub mod validation;
pub mod vehicle;
