//! End-to-end elicitation with scripted answers

use saaty_core::{ScriptedNavigator, compute_membership, elicit, parse_elements};
use saaty_types::SaatyError;

use crate::common::{answers, elements, scripted_run};

#[test]
fn worked_example_two_elements() {
    let (matrix, membership) = scripted_run(&["A", "B"], &[(2, 0)]);

    assert_eq!(matrix.row(0), &[1.0, 3.0]);
    assert_eq!(matrix.row(1), &[1.0 / 3.0, 1.0]);
    assert!((membership.degrees()[0] - 0.75).abs() < 1e-12);
    assert!((membership.degrees()[1] - 0.25).abs() < 1e-12);
}

#[test]
fn single_element_degenerate_case() {
    let (matrix, membership) = scripted_run(&["A"], &[]);
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(membership.degrees(), &[1.0]);
}

#[test]
fn blank_element_input_runs_as_single_element() {
    let parsed = parse_elements("  ,  ");
    let mut navigator = ScriptedNavigator::new([]);
    let matrix = elicit(&mut navigator, &parsed).unwrap();
    assert_eq!(compute_membership(&matrix).degrees(), &[1.0]);
    assert!(navigator.prompts().is_empty());
}

#[test]
fn scripted_runs_are_bit_identical() {
    let labels = ["cost", "speed", "comfort", "safety"];
    let judgments = [(4, 0), (2, 1), (8, 0), (0, 0), (6, 1), (3, 0)];

    let (m1, mu1) = scripted_run(&labels, &judgments);
    let (m2, mu2) = scripted_run(&labels, &judgments);

    assert_eq!(m1, m2);
    let bits = |mu: &saaty_types::MembershipVector| -> Vec<u64> {
        mu.iter().map(f64::to_bits).collect()
    };
    assert_eq!(bits(&mu1), bits(&mu2));
}

#[test]
fn completed_matrix_invariants() {
    let labels = ["a", "b", "c", "d", "e"];
    let judgments = [
        (1, 0),
        (8, 1),
        (3, 0),
        (0, 1),
        (5, 0),
        (2, 1),
        (7, 0),
        (4, 1),
        (6, 0),
        (8, 0),
    ];
    let (matrix, membership) = scripted_run(&labels, &judgments);

    assert!(matrix.is_complete());
    for i in 0..labels.len() {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..labels.len() {
            assert!((matrix.get(i, j) * matrix.get(j, i) - 1.0).abs() < 1e-12);
        }
    }
    assert_eq!(membership.len(), labels.len());
    assert!(membership.iter().all(|d| d > 0.0 && d < 1.0));
}

#[test]
fn direction_decides_which_side_gets_the_intensity() {
    let (first, _) = scripted_run(&["x", "y"], &[(6, 0)]);
    let (second, _) = scripted_run(&["x", "y"], &[(6, 1)]);
    assert_eq!(first.get(0, 1), 7.0);
    assert_eq!(second.get(1, 0), 7.0);
    assert_eq!(first.get(1, 0), second.get(0, 1));
}

#[test]
fn duplicate_labels_are_compared_by_position() {
    let (matrix, _) = scripted_run(&["same", "same"], &[(1, 1)]);
    assert_eq!(matrix.get(0, 1), 0.5);
    assert_eq!(matrix.get(1, 0), 2.0);
}

#[test]
fn running_out_of_input_yields_no_matrix() {
    let mut navigator = ScriptedNavigator::new(answers(&[(2, 0), (3, 1)]));
    let result = elicit(&mut navigator, &elements(&["a", "b", "c"]));
    assert!(matches!(result, Err(SaatyError::InputSourceUnavailable(_))));
}
