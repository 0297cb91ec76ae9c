pub mod edicion;
pub mod historial;
pub mod inventario;
pub mod notas_venta;
pub mod pendientes;
