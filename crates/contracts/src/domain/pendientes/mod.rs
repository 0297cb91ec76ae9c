pub mod aggregate;

pub use aggregate::{MaterialLine, WorkItem};
