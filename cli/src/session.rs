use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sweepgrid_core::{Coord2, Grid, GridConfig, QueryOutcome};

#[derive(Copy, Clone, Debug)]
pub struct SessionOptions {
    pub grid: GridConfig,
    pub queries: u32,
    pub json: bool,
}

/// Reads the grid rows and query lines from `reader` and writes one outcome
/// line per query to `writer`.
///
/// Any malformed line or failed query aborts the whole run; queries against the
/// grid itself are independent, so the abort is session policy, not a grid
/// state issue.
pub fn run(reader: impl BufRead, mut writer: impl Write, options: &SessionOptions) -> Result<()> {
    let mut lines = reader.lines();

    let mut rows = Vec::with_capacity(usize::from(options.grid.height));
    for index in 0..options.grid.height {
        let row = lines
            .next()
            .with_context(|| format!("grid row {index} is missing"))?
            .with_context(|| format!("failed to read grid row {index}"))?;
        rows.push(row);
    }
    let grid = Grid::build(&rows, options.grid).context("invalid grid definition")?;

    for index in 0..options.queries {
        let line = lines
            .next()
            .with_context(|| format!("query line {index} is missing"))?
            .with_context(|| format!("failed to read query line {index}"))?;
        let coords =
            parse_query(&line).with_context(|| format!("malformed query line {index:?}"))?;

        log::debug!("query {}: {:?}", index, coords);
        let outcome = grid
            .query(coords)
            .with_context(|| format!("query {index} at {coords:?} failed"))?;
        write_outcome(&mut writer, outcome, options.json)?;
    }

    Ok(())
}

/// Parses a `row column` pair, 0-indexed into the unpadded grid.
fn parse_query(line: &str) -> Result<Coord2> {
    let mut parts = line.split_whitespace();
    let row = parts
        .next()
        .context("missing row coordinate")?
        .parse()
        .context("row is not a valid coordinate")?;
    let col = parts
        .next()
        .context("missing column coordinate")?
        .parse()
        .context("column is not a valid coordinate")?;
    Ok((row, col))
}

fn write_outcome(writer: &mut impl Write, outcome: QueryOutcome, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&outcome).context("failed to serialize outcome")?;
        writeln!(writer, "{line}")?;
        return Ok(());
    }

    match outcome {
        QueryOutcome::HitMine => writeln!(writer, "MINE - YOU LOSE")?,
        QueryOutcome::NeighborCount(count) => {
            writeln!(writer, "NO MINE - {count} SURROUNDING IT")?
        }
        QueryOutcome::Revealed(count) => writeln!(writer, "NO MINE - {count} SQUARES REVEALED")?,
    }
    Ok(())
}
