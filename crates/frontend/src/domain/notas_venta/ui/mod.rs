pub mod list;

pub use list::NotasVentaList;
