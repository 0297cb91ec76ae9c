pub mod cola;
pub mod consumo;
