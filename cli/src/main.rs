use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweepgrid_core::{Coord, GridConfig};

mod session;

/// Annotates a mine grid and answers point queries against it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Input file holding the grid rows followed by the query lines; stdin if omitted
    input: Option<PathBuf>,

    /// Output file; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long, default_value_t = 30)]
    width: Coord,

    /// Grid height in cells
    #[arg(long, default_value_t = 16)]
    height: Coord,

    /// Number of query lines to answer
    #[arg(long, default_value_t = 5)]
    queries: u32,

    /// Emit each outcome as a JSON line instead of the fixed text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = session::SessionOptions {
        grid: GridConfig::new(args.width, args.height),
        queries: args.queries,
        json: args.json,
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    session::run(reader, &mut writer, &options)?;
    writer.flush().context("failed to flush output")
}
