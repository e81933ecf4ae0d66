//! Membership degrees from a completed judgment matrix.

use saaty_types::{JudgmentMatrix, MembershipVector};

/// Normalizes each column by its sum, then averages each row.
///
/// Column sums are at least 1 because the diagonal is 1 and every entry is
/// positive. The result is not rescaled to sum to exactly 1.
#[must_use]
pub fn compute_membership(matrix: &JudgmentMatrix) -> MembershipVector {
    let n = matrix.len();
    let col_sums: Vec<f64> = (0..n)
        .map(|col| matrix.rows().map(|row| row[col]).sum())
        .collect();

    let degrees = matrix
        .rows()
        .map(|row| {
            let ratio_sum: f64 = row
                .iter()
                .zip(&col_sums)
                .map(|(value, col_sum)| value / col_sum)
                .sum();
            ratio_sum / n as f64
        })
        .collect();

    MembershipVector::new(degrees)
}
