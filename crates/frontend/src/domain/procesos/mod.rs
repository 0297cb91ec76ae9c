pub mod api;
pub mod stage;
pub mod ui;
