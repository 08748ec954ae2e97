//! Daily stock report rendering.

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{Inventory, Item};

/// Stock as it stood at the end of a given day (day 0 is the opening stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl Snapshot {
    /// Copy the inventory, or only the named item when `only` is set.
    pub fn capture(day: u32, inventory: &Inventory, only: Option<&str>) -> Self {
        let items = match only {
            Some(name) => inventory.find_by_name(name).cloned().into_iter().collect(),
            None => inventory.items().to_vec(),
        };
        Self { day, items }
    }
}

/// Write one day of the stock table.
pub fn write_table_day(out: &mut impl Write, snapshot: &Snapshot) -> std::io::Result<()> {
    writeln!(out, "-------- day {} --------", snapshot.day)?;
    writeln!(out, "name, sellIn, quality")?;
    for item in &snapshot.items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
