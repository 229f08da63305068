//! Option lists for single-choice fields and the diff between two of them.
//!
//! A select is modelled as a fixed placeholder followed by zero or more real
//! options. Diffs only ever touch the real options; indices in [`OptionOp`]
//! count from the first option after the placeholder.

use crate::vehicle::FuelType;
use serde::{Deserialize, Serialize};

/// A selectable `<option>`: submitted value plus visible label.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<FuelType> for ChoiceOption {
    fn from(fuel: FuelType) -> Self {
        ChoiceOption::new(fuel.value(), fuel.label())
    }
}

/// One mutation of the real options of a select.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OptionOp {
    /// Remove the option at `index` (0 = first option after the placeholder).
    Remove { index: usize },
    /// Append an option at the end of the list.
    Append(ChoiceOption),
}

/// Compute the operations that turn `current` into exactly `target`.
///
/// The longest common prefix is kept in place. Everything after it is
/// removed, highest index first so earlier indices stay valid, and the rest
/// of `target` is appended. Removals always come before appends.
pub fn diff_options(current: &[ChoiceOption], target: &[ChoiceOption]) -> Vec<OptionOp> {
    let keep = current
        .iter()
        .zip(target.iter())
        .take_while(|(have, want)| have == want)
        .count();

    let mut ops: Vec<OptionOp> = (keep..current.len())
        .rev()
        .map(|index| OptionOp::Remove { index })
        .collect();
    ops.extend(target[keep..].iter().cloned().map(OptionOp::Append));
    ops
}

/// Apply a list of operations to an in-memory option list.
///
/// Out-of-range removals are ignored, matching `HTMLSelectElement.remove`.
pub fn apply_ops(options: &mut Vec<ChoiceOption>, ops: &[OptionOp]) {
    for op in ops {
        match op {
            OptionOp::Remove { index } => {
                if *index < options.len() {
                    options.remove(*index);
                }
            }
            OptionOp::Append(option) => options.push(option.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petrol() -> ChoiceOption {
        FuelType::Petrol.into()
    }

    fn diesel() -> ChoiceOption {
        FuelType::Diesel.into()
    }

    #[test]
    fn identical_lists_need_no_ops() {
        let list = vec![petrol(), diesel()];
        assert!(diff_options(&list, &list).is_empty());
    }

    #[test]
    fn growing_keeps_prefix_and_appends() {
        let ops = diff_options(&[petrol()], &[petrol(), diesel()]);
        assert_eq!(ops, vec![OptionOp::Append(diesel())]);
    }

    #[test]
    fn shrinking_removes_trailing_options() {
        let ops = diff_options(&[petrol(), diesel()], &[petrol()]);
        assert_eq!(ops, vec![OptionOp::Remove { index: 1 }]);
    }

    #[test]
    fn clearing_removes_from_the_end() {
        let ops = diff_options(&[petrol(), diesel()], &[]);
        assert_eq!(
            ops,
            vec![OptionOp::Remove { index: 1 }, OptionOp::Remove { index: 0 }]
        );
    }

    #[test]
    fn mismatched_prefix_is_replaced() {
        let stale = ChoiceOption::new("cng", "CNG");
        let current = vec![stale, petrol()];
        let target = vec![petrol(), diesel()];
        let mut applied = current.clone();
        apply_ops(&mut applied, &diff_options(&current, &target));
        assert_eq!(applied, target, "stale options must not survive the diff");
    }

    #[test]
    fn removals_precede_appends() {
        let ops = diff_options(&[diesel()], &[petrol()]);
        assert_eq!(
            ops,
            vec![OptionOp::Remove { index: 0 }, OptionOp::Append(petrol())]
        );
    }

    #[test]
    fn out_of_range_removal_is_ignored() {
        let mut options = vec![petrol()];
        apply_ops(&mut options, &[OptionOp::Remove { index: 3 }]);
        assert_eq!(options, vec![petrol()]);
    }
}
