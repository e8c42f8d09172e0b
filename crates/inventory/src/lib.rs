//! Inventory domain module.
//!
//! This crate contains the inventory record model and the in-memory store that
//! owns it, implemented purely as deterministic domain logic (no IO, no
//! terminal, no storage). Callers hand it already-validated, typed values.

pub mod config;
pub mod item;
pub mod store;

pub use config::{DEFAULT_CAPACITY, DEFAULT_LOW_STOCK_THRESHOLD, StoreConfig};
pub use item::{AddItem, Category, Item, ItemId};
pub use store::{InventoryStore, SortKey, SortOrder, Updated};
