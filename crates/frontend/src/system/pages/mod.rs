pub mod home;
pub mod login;
pub mod programa;

pub use home::HomePage;
pub use login::LoginPage;
pub use programa::ProgramaPage;
