//! Shared test utilities and fixtures

#![allow(dead_code)]

use saaty_core::{ScriptedNavigator, compute_membership, elicit};
use saaty_types::{Element, JudgmentMatrix, MembershipVector};

pub fn elements(labels: &[&str]) -> Vec<Element> {
    labels
        .iter()
        .map(|label| Element::new(*label).expect("test labels are non-empty"))
        .collect()
}

/// Flattens `(scale index, direction)` answers in prompt order.
pub fn answers(judgments: &[(usize, usize)]) -> Vec<usize> {
    judgments
        .iter()
        .flat_map(|&(scale, direction)| [scale, direction])
        .collect()
}

/// Runs a full scripted elicitation and derives membership.
pub fn scripted_run(
    labels: &[&str],
    judgments: &[(usize, usize)],
) -> (JudgmentMatrix, MembershipVector) {
    let mut navigator = ScriptedNavigator::new(answers(judgments));
    let matrix = elicit(&mut navigator, &elements(labels)).expect("scripted elicitation");
    assert_eq!(navigator.remaining(), 0, "every scripted answer is consumed");
    let membership = compute_membership(&matrix);
    (matrix, membership)
}
