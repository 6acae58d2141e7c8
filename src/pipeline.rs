//! Aggregation pipeline: streaming moments, optionally a buffered sample
//!
//! The two memory policies are distinct variants rather than a boolean
//! threaded through every call: [`Aggregator::compact`] runs in O(1) memory
//! and produces moments only, while [`Aggregator::buffered`] additionally
//! retains every value so quartiles can be extracted at the end. Which policy
//! a pipeline pays for is visible at construction.

use serde::Serialize;

use crate::error::Error;
use crate::quantiles::nearest_rank;
use crate::quantiles::Quartiles;
use crate::statistics::RunningStats;

/// Finalized statistics for one input stream
///
/// Produced exactly once, at end-of-stream, by [`Aggregator::finish`];
/// read-only thereafter. Serializes to a flat JSON object whose `q1`,
/// `median`, and `q3` keys appear only when quartiles were requested.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    pub count: u64,
    #[serde(flatten)]
    pub quartiles: Option<Quartiles>,
}

/// Single-pass aggregator over a stream of values
///
/// # Example
///
/// ```
/// use pipestats::pipeline::Aggregator;
///
/// let mut aggregator = Aggregator::buffered();
/// for value in [4.0, 1.0, 3.0, 2.0] {
///     aggregator.push(value);
/// }
///
/// let summary = aggregator.finish().unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.quartiles.unwrap().median, 3.0);
/// ```
#[derive(Clone, Debug)]
pub enum Aggregator {
    /// Moments only, O(1) memory
    Compact(RunningStats),
    /// Moments plus the full sample, O(n) memory, enables quartiles
    Buffered {
        stats: RunningStats,
        sample: Vec<f64>,
    },
}

impl Aggregator {
    /// Constant-memory aggregation without quartile support
    pub fn compact() -> Self {
        Aggregator::Compact(RunningStats::new())
    }

    /// Sample-retaining aggregation so [`finish`](Self::finish) can report
    /// quartiles; memory grows with the number of values pushed
    pub fn buffered() -> Self {
        Aggregator::Buffered {
            stats: RunningStats::new(),
            sample: Vec::new(),
        }
    }

    /// Feed one value into the pipeline
    pub fn push(&mut self, value: f64) {
        match self {
            Aggregator::Compact(stats) => stats.add(value),
            Aggregator::Buffered { stats, sample } => {
                stats.add(value);
                sample.push(value);
            }
        }
    }

    /// Number of values pushed so far
    pub fn len(&self) -> u64 {
        self.stats().len()
    }

    /// Check if nothing has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.stats().is_empty()
    }

    fn stats(&self) -> &RunningStats {
        match self {
            Aggregator::Compact(stats) => stats,
            Aggregator::Buffered { stats, .. } => stats,
        }
    }

    /// Consume the aggregator and produce the finalized [`Summary`]
    ///
    /// The buffered variant sorts its sample (total order over `f64`, so NaN
    /// values sort to the high end deterministically) and extracts quartiles.
    /// Fails with [`Error::NoData`] when the stream contained no values.
    pub fn finish(self) -> Result<Summary, Error> {
        match self {
            Aggregator::Compact(stats) => stats.summarize(),
            Aggregator::Buffered { stats, mut sample } => {
                let mut summary = stats.summarize()?;
                sample.sort_by(f64::total_cmp);
                summary.quartiles = Some(nearest_rank::quartiles(&sample)?);
                Ok(summary)
            }
        }
    }
}
