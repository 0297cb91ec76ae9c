pub mod aggregate;

pub use aggregate::{decode_cantidades, decode_placas, EditPayload, EditRow};
