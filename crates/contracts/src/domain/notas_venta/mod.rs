pub mod aggregate;

pub use aggregate::{NotaVentaResumen, ProcesoEstado};
