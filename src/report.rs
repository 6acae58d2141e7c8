//! Rendering a [`Summary`] for consumption
//!
//! Two renderings: an aligned human-readable block for terminals and a JSON
//! object for downstream tooling. Quartile lines and keys appear only when
//! the summary carries quartiles.

use std::io::{self, Write};

use crate::pipeline::Summary;

/// Output rendering selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Aligned `Label: value` lines
    Human,
    /// Pretty-printed JSON object
    Json,
}

/// Write `summary` to `out` in the requested format
pub fn render<W: Write>(summary: &Summary, format: Format, out: &mut W) -> io::Result<()> {
    match format {
        Format::Human => render_human(summary, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            writeln!(out)
        }
    }
}

fn render_human<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    writeln!(out, "Mean:     {}", summary.mean)?;
    writeln!(out, "Variance: {} ({} SD)", summary.variance, summary.stdev)?;
    writeln!(out, "Min:      {}", summary.min)?;
    writeln!(out, "Max:      {}", summary.max)?;
    writeln!(out, "Count:    {}", summary.count)?;

    if let Some(q) = &summary.quartiles {
        writeln!(out, "Q1:       {}", q.q1)?;
        writeln!(out, "Median:   {}", q.median)?;
        writeln!(out, "Q3:       {}", q.q3)?;
    }

    Ok(())
}
