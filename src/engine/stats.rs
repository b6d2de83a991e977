//! Pearson correlation between two numeric columns.

use super::aggregate::NumericField;
use crate::dataset::TrackRecord;
use thiserror::Error;

/// Why a correlation could not be computed.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("Correlation needs at least two paired samples, got {0}")]
    NotEnoughData(usize),
    #[error("Correlation is undefined: '{0}' has zero variance")]
    ZeroVariance(&'static str),
}

/// Pearson correlation coefficient of two columns via raw moments:
///
/// ```text
/// r = (nΣxy − ΣxΣy) / ( sqrt(nΣx² − (Σx)²) · sqrt(nΣy² − (Σy)²) )
/// ```
///
/// Only rows where both columns are present contribute. Undercounts and
/// zero-variance columns come back as errors, never as NaN.
pub fn pearson_correlation(
    records: &[TrackRecord],
    x: NumericField,
    y: NumericField,
) -> Result<f64, StatsError> {
    let mut n = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for record in records {
        let (value_x, value_y) = match (x.extract(record), y.extract(record)) {
            (Some(value_x), Some(value_y)) => (value_x, value_y),
            _ => continue,
        };
        n += 1;
        sum_x += value_x;
        sum_y += value_y;
        sum_xy += value_x * value_y;
        sum_x2 += value_x * value_x;
        sum_y2 += value_y * value_y;
    }

    if n < 2 {
        return Err(StatsError::NotEnoughData(n));
    }

    let n = n as f64;
    // Rounding can push a zero-variance term slightly negative, so treat
    // anything non-positive as undefined rather than taking its root.
    let var_term_x = n * sum_x2 - sum_x * sum_x;
    let var_term_y = n * sum_y2 - sum_y * sum_y;
    if var_term_x <= 0.0 {
        return Err(StatsError::ZeroVariance(x.name()));
    }
    if var_term_y <= 0.0 {
        return Err(StatsError::ZeroVariance(y.name()));
    }

    Ok((n * sum_xy - sum_x * sum_y) / (var_term_x.sqrt() * var_term_y.sqrt()))
}
