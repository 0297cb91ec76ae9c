pub mod list;

pub use list::UsuariosList;
