//! Append-only job inventory.

mod store;

pub use store::{InventoryStore, JsonFileStore, MemoryStore};
