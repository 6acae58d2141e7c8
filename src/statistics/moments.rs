//! Running statistics (mean, variance, min, max)
//!
//! Computes streaming statistics using Welford's numerically stable online
//! algorithm: O(1) memory and O(1) time per value, regardless of stream length.

use crate::error::Error;
use crate::pipeline::Summary;

/// Running statistics accumulator using Welford's algorithm
///
/// Ingests one value at a time and maintains mean, variance, standard
/// deviation, min, max, sum, and count in a single pass with constant memory.
/// Welford's update avoids the catastrophic cancellation that the naive
/// sum-of-squares variance formula suffers for large means or low-variance
/// data.
///
/// # Example
///
/// ```
/// use pipestats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 0.001);
/// assert!((stats.variance() - 4.0).abs() < 0.001);
/// assert!((stats.stddev() - 2.0).abs() < 0.001);
/// assert_eq!(stats.min(), Some(2.0));
/// assert_eq!(stats.max(), Some(9.0));
/// ```
///
/// # Non-finite values
///
/// NaN and infinite inputs are not filtered: they propagate into the mean and
/// variance exactly as they would through any floating-point sum. The `<`/`>`
/// extremum comparisons are false for NaN, so min and max only ever hold
/// values that actually compared.
#[derive(Clone, Debug)]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from the mean (M2 in Welford's algorithm)
    m2: f64,
    /// Exact running sum of all values
    total: f64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            total: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Ingest a value
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.total += value;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        // Welford's algorithm
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Number of values ingested
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if no values have been ingested yet
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the values seen so far (0.0 while empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, clamped to zero
    ///
    /// Welford's M2 is non-negative up to rounding; the clamp guards the one
    /// remaining way a tiny negative artifact could reach `sqrt`. A NaN
    /// variance (from NaN input) is left untouched.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let variance = self.m2 / self.count as f64;
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }

    /// Population standard deviation, `sqrt` of the clamped variance
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Sum of all values ingested
    pub fn sum(&self) -> f64 {
        self.total
    }

    /// Minimum value seen, `None` while empty
    pub fn min(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum value seen, `None` while empty
    pub fn max(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Finalize the accumulator into a read-only [`Summary`]
    ///
    /// Fails with [`Error::NoData`] when no values were ingested, since the
    /// derived statistics would otherwise divide by zero. The summary carries
    /// no quartiles; the buffered pipeline fills those in separately.
    pub fn summarize(&self) -> Result<Summary, Error> {
        if self.count == 0 {
            return Err(Error::NoData);
        }
        let variance = self.variance();
        Ok(Summary {
            mean: self.mean,
            variance,
            stdev: variance.sqrt(),
            min: self.min,
            max: self.max,
            count: self.count,
            quartiles: None,
        })
    }
}
