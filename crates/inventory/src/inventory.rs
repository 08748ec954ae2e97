//! The daily update pass over a stock collection.

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;

/// Advance every item by one day, in collection order.
///
/// An empty collection is a no-op. Call once per simulated day.
pub fn update_all(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = Category::resolve(&item.name);
        let (days_before, quality_before) = (item.days_remaining, item.quality);

        category.apply(item);

        tracing::debug!(
            item = %item.name,
            category = %category,
            days_before,
            days_after = item.days_remaining,
            quality_before,
            quality_after = item.quality,
            "item updated"
        );
    }
    tracing::trace!(items = items.len(), "daily update complete");
}

/// First item whose name matches exactly, if any.
pub fn find_by_name<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.name == name)
}

/// Owner of a stock collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Run the nightly update once.
    pub fn update_quality(&mut self) {
        update_all(&mut self.items);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        find_by_name(&self.items, name)
    }

    /// Like [`Inventory::find_by_name`], for callers that require the item to exist.
    pub fn get(&self, name: &str) -> DomainResult<&Item> {
        self.find_by_name(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
