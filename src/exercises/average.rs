//! Arithmetic mean of a sequence

use crate::common::{Error, Result};

/// Calculate the average of a sequence of numbers.
///
/// An empty sequence has no average: the division by a zero count is
/// reported as [`Error::DivisionByZero`] and left for the caller to surface.
/// The sum is accumulated as `i128` so no sequence of `i64` can overflow it.
pub fn calculate_average(numbers: &[i64]) -> Result<f64> {
    let total: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    let count = numbers.len();
    if count == 0 {
        return Err(Error::DivisionByZero);
    }
    let average = total as f64 / count as f64;
    tracing::debug!(%total, count, average, "calculated average");
    Ok(average)
}
