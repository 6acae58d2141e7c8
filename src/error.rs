//! Error taxonomy for the aggregation pipeline
//!
//! Every failure is fatal to the run: the tool produces either a complete
//! summary or an error, never partial output.

use thiserror::Error;

/// Errors raised while decoding input or finalizing statistics
#[derive(Debug, Error)]
pub enum Error {
    /// The input stream contained no values, so there is nothing to summarize.
    ///
    /// Finalizing an empty accumulator would divide by zero; this surfaces
    /// the empty-stream case explicitly instead of emitting NaN statistics.
    #[error("no data: input stream contained no values")]
    NoData,

    /// A line of input did not parse as a floating-point number.
    ///
    /// Malformed input fails the whole run; there is no skip-and-warn mode.
    #[error("line {line}: cannot parse {content:?} as a number")]
    ParseLine {
        /// 1-based line number within the input stream
        line: usize,
        /// The offending line, trimmed of surrounding whitespace
        content: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A requested quantile probability fell outside `[0, 1]`.
    #[error("probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// The underlying input stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
