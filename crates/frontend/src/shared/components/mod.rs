pub mod back_button;
pub mod modal;

pub use back_button::BackButton;
pub use modal::AlertModal;
