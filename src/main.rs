use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use pipestats::error::Error;
use pipestats::input::LineValues;
use pipestats::pipeline::Aggregator;
use pipestats::report::{self, Format};

#[derive(Debug, Parser)]
#[command(
    name = "pipestats",
    version,
    about = "Compute basic statistics on an input stream of numbers",
    long_about = "pipestats reads one number per line from standard input and prints the\n\
        mean, variance, standard deviation, min, max, and count. With --quartiles\n\
        it also prints the first quartile, median, and third quartile.\n\n\
        This program only works on a single column, so if you are working with a\n\
        CSV file use 'cut' to select the appropriate column and pipe the output\n\
        to pipestats.",
    after_help = "EXAMPLES:\n    \
        Basic statistics on the second column of a CSV:\n        \
        cut -d ',' -f 2 somefile.csv | pipestats\n\n    \
        Quartiles as JSON, skipping the CSV header:\n        \
        cut -d ',' -f 2 somefile.csv | pipestats -q -j -s"
)]
struct Cli {
    /// Compute the median and quartiles (keeps every value in memory, so it
    /// might not work on very large streams)
    #[arg(short, long)]
    quartiles: bool,

    /// Output statistics in JSON format
    #[arg(short, long)]
    json: bool,

    /// Do not consider the first line of input
    #[arg(short, long)]
    skip_header: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let stdin = io::stdin();
    let values = LineValues::new(stdin.lock(), cli.skip_header);

    let mut aggregator = if cli.quartiles {
        Aggregator::buffered()
    } else {
        Aggregator::compact()
    };
    for value in values {
        aggregator.push(value?);
    }

    let summary = aggregator.finish()?;
    debug!("aggregated {} values", summary.count);

    let format = if cli.json { Format::Json } else { Format::Human };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::render(&summary, format, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
