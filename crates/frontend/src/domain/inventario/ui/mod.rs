pub mod list;

pub use list::InventarioList;
