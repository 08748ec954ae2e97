use serde::{Deserialize, Serialize};

/// A stock item as tracked by the nightly valuation.
///
/// `name` decides which update rule governs the item and is never changed by
/// the engine. `days_remaining` is not clamped and goes negative once the item
/// is past its sell-by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(alias = "sellIn")]
    pub days_remaining: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, days_remaining: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            days_remaining,
            quality,
        }
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.days_remaining, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_stock_table_row() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");
    }

    #[test]
    fn deserializes_legacy_sell_in_field() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Elixir of the Mongoose","sellIn":5,"quality":7}"#)
                .unwrap();
        assert_eq!(item, Item::new("Elixir of the Mongoose", 5, 7));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Item::new("Aged Brie", -1, 3)).unwrap();
        assert_eq!(json["daysRemaining"], -1);
        assert_eq!(json["quality"], 3);
    }

    #[test]
    fn expiry_starts_below_zero() {
        assert!(!Item::new("x", 0, 1).is_expired());
        assert!(Item::new("x", -1, 1).is_expired());
    }
}
