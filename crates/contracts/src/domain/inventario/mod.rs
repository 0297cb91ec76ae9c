pub mod aggregate;

pub use aggregate::InventoryEntry;
