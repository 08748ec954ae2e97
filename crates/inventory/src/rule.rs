//! Daily update rules, one per [`Category`].
//!
//! Every category except `Legendary` follows the same daily template:
//!
//! 1. `days_remaining -= 1`
//! 2. adjust quality once
//! 3. if the item is now expired (`days_remaining < 0`), adjust quality again
//!
//! Each quality step is individually clamped to `[MIN_QUALITY, MAX_QUALITY]`,
//! so no sequence of steps can leave the range.

use crate::category::Category;
use crate::item::Item;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Quality of legendary items in the canonical stock. Never inspected by any rule.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Backstage passes gain an extra step below this many days remaining...
const PASS_FIRST_BAND: i32 = 11;
/// ...and another one below this many.
const PASS_SECOND_BAND: i32 = 6;

impl Category {
    /// Advance `item` by one day under this category's rule.
    pub fn apply(self, item: &mut Item) {
        match self {
            Category::Legendary => {}
            Category::Decaying => run_template(item, decrement_quality),
            Category::Growing => run_template(item, increment_quality),
            Category::Conjured => run_template(item, |item| {
                decrement_quality(item);
                decrement_quality(item);
            }),
            Category::BackstagePass => {
                run_template(item, increment_quality);

                // Independent checks; both bands fire below six days.
                if item.days_remaining < PASS_FIRST_BAND {
                    increment_quality(item);
                }
                if item.days_remaining < PASS_SECOND_BAND {
                    increment_quality(item);
                }
                if item.is_expired() {
                    item.quality = MIN_QUALITY;
                }
            }
        }
    }
}

fn run_template(item: &mut Item, adjust_quality: impl Fn(&mut Item)) {
    item.days_remaining = item.days_remaining.saturating_sub(1);
    adjust_quality(item);
    if item.is_expired() {
        adjust_quality(item);
    }
}

/// Raise quality by one unless it is already at the cap.
pub fn increment_quality(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

/// Lower quality by one unless it is already at the floor.
pub fn decrement_quality(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn after(category: Category, days_remaining: i32, quality: i32) -> Item {
        let mut item = Item::new("item", days_remaining, quality);
        category.apply(&mut item);
        item
    }

    #[test]
    fn decaying_loses_one_per_day() {
        let item = after(Category::Decaying, 1, 1);
        assert_eq!((item.days_remaining, item.quality), (0, 0));
    }

    #[test]
    fn decaying_loses_two_once_expired() {
        let item = after(Category::Decaying, 0, 2);
        assert_eq!((item.days_remaining, item.quality), (-1, 0));
        assert_eq!(after(Category::Decaying, -3, 10).quality, 8);
    }

    #[test]
    fn decaying_never_goes_negative() {
        assert_eq!(after(Category::Decaying, 1, 0).quality, 0);
        assert_eq!(after(Category::Decaying, 0, 1).quality, 0);
    }

    #[test]
    fn growing_gains_one_per_day_and_two_once_expired() {
        assert_eq!(after(Category::Growing, 1, 1).quality, 2);
        assert_eq!(after(Category::Growing, 0, 1).quality, 3);
    }

    #[test]
    fn growing_is_capped() {
        assert_eq!(after(Category::Growing, 1, 50).quality, 50);
        assert_eq!(after(Category::Growing, 0, 49).quality, 50);
    }

    #[test]
    fn legendary_is_frozen() {
        let item = after(Category::Legendary, 0, LEGENDARY_QUALITY);
        assert_eq!((item.days_remaining, item.quality), (0, LEGENDARY_QUALITY));
        let item = after(Category::Legendary, -5, 1);
        assert_eq!((item.days_remaining, item.quality), (-5, 1));
    }

    #[test]
    fn conjured_decays_twice_as_fast() {
        assert_eq!(after(Category::Conjured, 3, 6).quality, 4);
        assert_eq!(after(Category::Conjured, 0, 6).quality, 2);
        assert_eq!(after(Category::Conjured, 0, 3).quality, 0);
        assert_eq!(after(Category::Conjured, 5, 1).quality, 0);
    }

    #[test]
    fn backstage_pass_bands() {
        assert_eq!(after(Category::BackstagePass, 15, 1).quality, 2);
        assert_eq!(after(Category::BackstagePass, 11, 1).quality, 3);
        assert_eq!(after(Category::BackstagePass, 10, 1).quality, 3);
        assert_eq!(after(Category::BackstagePass, 9, 1).quality, 3);
        assert_eq!(after(Category::BackstagePass, 6, 1).quality, 4);
        assert_eq!(after(Category::BackstagePass, 5, 1).quality, 4);
        assert_eq!(after(Category::BackstagePass, 4, 1).quality, 4);
        assert_eq!(after(Category::BackstagePass, 1, 1).quality, 4);
    }

    #[test]
    fn backstage_pass_is_worthless_after_the_concert() {
        assert_eq!(after(Category::BackstagePass, 0, 1).quality, 0);
        assert_eq!(after(Category::BackstagePass, 0, 50).quality, 0);
        assert_eq!(after(Category::BackstagePass, -4, 20).quality, 0);
    }

    #[test]
    fn backstage_pass_checks_cap_on_every_step() {
        assert_eq!(after(Category::BackstagePass, 4, 47).quality, 50);
        assert_eq!(after(Category::BackstagePass, 8, 49).quality, 50);
    }

    fn non_legendary() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::Decaying),
            Just(Category::Growing),
            Just(Category::Conjured),
            Just(Category::BackstagePass),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn quality_stays_in_range(
            category in non_legendary(),
            days_remaining in -100i32..100,
            quality in MIN_QUALITY..=MAX_QUALITY,
            days in 1usize..60,
        ) {
            let mut item = Item::new("item", days_remaining, quality);
            for _ in 0..days {
                category.apply(&mut item);
                prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
            }
            prop_assert_eq!(item.days_remaining, days_remaining - days as i32);
        }

        #[test]
        fn fresh_decaying_item_loses_exactly_one(
            days_remaining in 1i32..1000,
            quality in 1i32..=MAX_QUALITY,
        ) {
            let item = after(Category::Decaying, days_remaining, quality);
            prop_assert_eq!(item.days_remaining, days_remaining - 1);
            prop_assert_eq!(item.quality, quality - 1);
        }

        #[test]
        fn legendary_never_changes(
            days_remaining in any::<i32>(),
            quality in any::<i32>(),
            days in 1usize..60,
        ) {
            let mut item = Item::new("item", days_remaining, quality);
            for _ in 0..days {
                Category::Legendary.apply(&mut item);
            }
            prop_assert_eq!(item, Item::new("item", days_remaining, quality));
        }
    }
}
