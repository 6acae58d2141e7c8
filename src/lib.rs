//! # Pipestats
//!
//! Single-pass descriptive statistics for newline-delimited numeric streams.
//!
//! Pipestats reads one floating-point value per line and computes mean,
//! variance, standard deviation, min, max, and count in constant memory.
//! When quartiles are requested it additionally buffers the full sample,
//! sorts it once at end-of-stream, and extracts q1, the median, and q3 with
//! the nearest-rank method.
//!
//! ## Quick Start
//!
//! ```
//! use pipestats::prelude::*;
//!
//! let mut aggregator = Aggregator::buffered();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     aggregator.push(value);
//! }
//!
//! let summary = aggregator.finish().unwrap();
//! assert!((summary.mean - 5.0).abs() < 0.001);
//! assert_eq!(summary.count, 8);
//! println!("Median: {}", summary.quartiles.unwrap().median);
//! ```
//!
//! ## Memory policy
//!
//! The aggregation pipeline comes in two explicit variants:
//!
//! - [`Aggregator::compact`](pipeline::Aggregator::compact): moments only,
//!   O(1) memory, suited to arbitrarily long streams
//! - [`Aggregator::buffered`](pipeline::Aggregator::buffered): retains every
//!   value for quartile extraction, O(n) memory
//!
//! ## Modules
//!
//! - [`statistics`]: the Welford streaming-moments accumulator
//! - [`quantiles`]: nearest-rank quantile estimation over sorted samples
//! - [`pipeline`]: the aggregator variants and the finalized [`Summary`](pipeline::Summary)
//! - [`input`]: line-by-line `f64` decoding from any `BufRead`
//! - [`report`]: human-readable and JSON rendering
//! - [`error`]: the error taxonomy shared by all of the above

pub mod error;
pub mod input;
pub mod pipeline;
pub mod quantiles;
pub mod report;
pub mod statistics;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::input::LineValues;
    pub use crate::pipeline::{Aggregator, Summary};
    pub use crate::quantiles::Quartiles;
    pub use crate::statistics::RunningStats;
}

pub use error::Error;
pub use pipeline::{Aggregator, Summary};
