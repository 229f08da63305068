//! Shared Dioxus components and form state for the pollution check apps.
//!
//! This crate provides:
//! - `model`: `CheckFormModel`, the plain form model every component edits
//! - `state`: reactive `FormState` with Dioxus Signals
//! - `components`: reusable RSX components (selectors, inputs, alert, submit)

pub mod components;
pub mod model;
pub mod state;
