//! Initial stock: the canonical item list and JSON seed parsing.

use gildedrose_core::{DomainError, DomainResult};

use crate::category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, Category, SULFURAS};
use crate::item::Item;
use crate::rule::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// The stock the shop opens with.
pub fn canonical_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

/// Parse a JSON array of items and validate them.
///
/// Legendary items may carry any quality; everything else must start within
/// `[MIN_QUALITY, MAX_QUALITY]`.
pub fn parse_items(json: &str) -> DomainResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed seed: {e}")))?;

    for item in &items {
        validate(item)?;
    }
    Ok(items)
}

fn validate(item: &Item) -> DomainResult<()> {
    if item.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if Category::resolve(&item.name) == Category::Legendary {
        return Ok(());
    }
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
        return Err(DomainError::invariant(format!(
            "quality of '{}' must be within {MIN_QUALITY}..={MAX_QUALITY} (got {})",
            item.name, item.quality
        )));
    }
    Ok(())
}
