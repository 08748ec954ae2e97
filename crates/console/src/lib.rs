//! Command-line bootstrap for the nightly valuation.
//!
//! Builds the initial stock, runs the daily update the requested number of
//! times and writes a per-day report.

pub mod cli;
pub mod report;

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::ser::{SerializeSeq, Serializer};

use gildedrose_inventory::seed::{canonical_items, parse_items};
use gildedrose_inventory::{Inventory, Item};

pub use cli::{Cli, OutputFormat};
pub use report::Snapshot;

pub const BANNER: &str = "OMGHAI!";

/// Initial stock: the seed file if one was given, else the canonical items.
pub fn load_items(cli: &Cli) -> Result<Vec<Item>> {
    let Some(path) = &cli.seed else {
        return Ok(canonical_items());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let items =
        parse_items(&json).with_context(|| format!("invalid seed file {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded seed");
    Ok(items)
}

/// Run the simulation, writing each day's report to `out` as soon as it is taken.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut inventory = Inventory::new(load_items(cli)?);
    if let Some(name) = &cli.inspect {
        inventory.get(name)?;
    }

    match cli.format {
        OutputFormat::Table => {
            writeln!(out, "{BANNER}")?;
            simulate(&mut inventory, cli, |snapshot| {
                report::write_table_day(&mut *out, snapshot)?;
                Ok(())
            })?;
        }
        OutputFormat::Json => {
            let mut serializer = serde_json::Serializer::pretty(&mut *out);
            let mut days = serializer.serialize_seq(None)?;
            simulate(&mut inventory, cli, |snapshot| {
                days.serialize_element(snapshot)?;
                Ok(())
            })?;
            days.end()?;
            writeln!(out)?;
        }
    }
    tracing::info!(days = cli.days, items = inventory.len(), "simulation finished");
    Ok(())
}

/// Emit the opening stock, then one snapshot after each simulated day.
fn simulate(
    inventory: &mut Inventory,
    cli: &Cli,
    mut emit: impl FnMut(&Snapshot) -> Result<()>,
) -> Result<()> {
    let only = cli.inspect.as_deref();
    emit(&Snapshot::capture(0, inventory, only))?;
    for day in 1..=cli.days {
        inventory.update_quality();
        emit(&Snapshot::capture(day, inventory, only))?;
    }
    Ok(())
}
