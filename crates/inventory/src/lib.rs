//! Inventory domain module.
//!
//! This crate contains the record type and the ordered in-memory store,
//! implemented purely as deterministic domain logic (no file or console IO).

pub mod record;
pub mod store;

pub use record::InventoryRecord;
pub use store::InventoryStore;
