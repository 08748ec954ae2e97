//! Item categories and the name-to-category lookup.

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Category of a stock item. Its daily update rule is [`Category::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Loses quality over time. Fallback for any unrecognized name.
    Decaying,
    Growing,
    Legendary,
    Conjured,
    BackstagePass,
}

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Exact, case-sensitive match; unknown names are `Decaying`.
    pub fn resolve(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Growing,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASS => Category::BackstagePass,
            CONJURED_MANA_CAKE => Category::Conjured,
            _ => Category::Decaying,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Decaying => "decaying",
            Category::Growing => "growing",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
            Category::BackstagePass => "backstage_pass",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
