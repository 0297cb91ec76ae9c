pub mod page;
pub mod queue_panel;

pub use page::ProcesoPage;
