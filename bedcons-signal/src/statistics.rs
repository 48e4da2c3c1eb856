//! Summary statistics over a vector of per-bin values.
//!
//! NaN policy: a bin without data is NaN, and [mean] and [median] let it
//! through. One NaN bin makes the whole statistic NaN; bins are never
//! dropped. [fraction_at_or_above] only counts bins `>= threshold`, and
//! since NaN never compares true a NaN bin adds to the denominator only.
//!
//! Empty input is reported as [StatisticsError::EmptyInput] rather than
//! as a NaN from a division by zero.

use crate::errors::StatisticsError;

pub fn mean(values: &[f64]) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

///
/// Middle value of the sorted input, or the mean of the two middle
/// values for an even number of elements.
///
pub fn median(values: &[f64]) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    if values.iter().any(|v| v.is_nan()) {
        return Ok(f64::NAN);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    Ok(median)
}

///
/// Share of values that are greater than or equal to `threshold`.
///
pub fn fraction_at_or_above(values: &[f64], threshold: f64) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    let hits = values.iter().filter(|v| **v >= threshold).count();
    Ok(hits as f64 / values.len() as f64)
}
