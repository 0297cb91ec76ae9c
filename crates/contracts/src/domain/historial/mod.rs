pub mod aggregate;

pub use aggregate::HistorialRow;
