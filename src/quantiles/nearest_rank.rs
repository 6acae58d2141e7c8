//! Nearest-rank quantile estimation over a sorted sample
//!
//! Exact order statistics over a fully materialized sample, as opposed to a
//! streaming sketch: the caller buffers every value, sorts once, and extracts
//! the requested cut-points. Memory is O(n); that trade-off is what makes the
//! estimates exact.

use serde::Serialize;

use crate::error::Error;

/// The probability cut-points behind [`quartiles`]
pub const QUARTILE_PROBABILITIES: [f64; 3] = [0.25, 0.5, 0.75];

/// First quartile, median, and third quartile of a sample
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

/// Estimate the value at each requested probability via the nearest-rank method
///
/// For a sample of `N` elements and probability `p`, the estimate is the
/// element at 0-based index `ceil(p * N)`, clamped to `N - 1`. The clamp makes
/// `p = 1.0` (and any `p` whose rank rounds up to `N`) select the maximum
/// instead of reading one past the end. No interpolation between adjacent
/// ranks is performed, so every estimate is a value that actually occurred in
/// the sample. A single-element sample yields that element for every
/// probability.
///
/// `sorted` must already be in ascending order; this function does not
/// re-sort.
///
/// # Errors
///
/// [`Error::NoData`] if `sorted` is empty, and
/// [`Error::ProbabilityOutOfRange`] if any probability falls outside `[0, 1]`
/// (NaN probabilities are rejected the same way).
///
/// # Example
///
/// ```
/// use pipestats::quantiles::nearest_rank;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// let estimates = nearest_rank::estimate(&sorted, &[0.25, 0.5, 0.75]).unwrap();
/// assert_eq!(estimates, vec![2.0, 3.0, 4.0]);
/// ```
pub fn estimate(sorted: &[f64], probabilities: &[f64]) -> Result<Vec<f64>, Error> {
    if sorted.is_empty() {
        return Err(Error::NoData);
    }
    for &p in probabilities {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::ProbabilityOutOfRange(p));
        }
    }

    let n = sorted.len();
    Ok(probabilities
        .iter()
        .map(|&p| {
            let rank = (p * n as f64).ceil() as usize;
            sorted[rank.min(n - 1)]
        })
        .collect())
}

/// Extract [`Quartiles`] from an ascending-sorted sample
///
/// Applies [`estimate`] at probabilities 0.25, 0.5, and 0.75.
pub fn quartiles(sorted: &[f64]) -> Result<Quartiles, Error> {
    let cuts = estimate(sorted, &QUARTILE_PROBABILITIES)?;
    Ok(Quartiles {
        q1: cuts[0],
        median: cuts[1],
        q3: cuts[2],
    })
}
