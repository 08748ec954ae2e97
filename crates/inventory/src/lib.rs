//! Inventory valuation module.
//!
//! This crate contains the nightly update rules for stock items, implemented
//! purely as deterministic domain logic (no IO, no storage). The caller owns
//! the item collection and runs [`update_all`] once per simulated day.

pub mod category;
pub mod inventory;
pub mod item;
pub mod rule;
pub mod seed;

pub use category::Category;
pub use inventory::{Inventory, find_by_name, update_all};
pub use item::Item;
pub use rule::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
