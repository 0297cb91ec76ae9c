pub mod menu;
pub mod page;

pub use menu::EdicionMenu;
pub use page::EditPage;
