//! Line-by-line decoding of numeric input
//!
//! Turns any [`BufRead`] into an iterator of `f64` values, one per line.
//! Decoding failures are fatal: a line that does not parse stops the run with
//! the offending line number rather than silently skewing the statistics.

use std::io::{BufRead, Lines};

use crate::error::Error;

/// Iterator over the numeric values of a text stream
///
/// Each line is trimmed of surrounding whitespace and parsed as `f64`. With
/// `skip_header` the first line is consumed and discarded before any value is
/// produced; it still counts toward the line numbers reported in errors.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use pipestats::input::LineValues;
///
/// let input = Cursor::new("1.5\n2.5\n");
/// let values: Result<Vec<f64>, _> = LineValues::new(input, false).collect();
/// assert_eq!(values.unwrap(), vec![1.5, 2.5]);
/// ```
pub struct LineValues<R> {
    lines: Lines<R>,
    line_no: usize,
    skip_header: bool,
}

impl<R: BufRead> LineValues<R> {
    /// Wrap a reader; `skip_header` discards the first line
    pub fn new(reader: R, skip_header: bool) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            skip_header,
        }
    }
}

impl<R: BufRead> Iterator for LineValues<R> {
    type Item = Result<f64, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skip_header {
            self.skip_header = false;
            match self.lines.next() {
                Some(Ok(_)) => self.line_no += 1,
                Some(Err(err)) => return Some(Err(err.into())),
                None => return None,
            }
        }

        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(err) => return Some(Err(err.into())),
        };
        self.line_no += 1;

        let trimmed = line.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Some(Ok(value)),
            Err(source) => Some(Err(Error::ParseLine {
                line: self.line_no,
                content: trimmed.to_string(),
                source,
            })),
        }
    }
}
