//! Summary statistics for comparing traces.

use crate::{Error, Result};

/// Mean of `|a[i] - b[i]|`. Empty inputs give 0.
pub fn mean_absolute_error(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::length_mismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Ok(0.0);
    }
    let total: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    Ok(total / a.len() as f64)
}

/// Root mean square of `a`. Empty input gives 0.
pub fn root_mean_square(a: &[f64]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    (a.iter().map(|x| x * x).sum::<f64>() / a.len() as f64).sqrt()
}
