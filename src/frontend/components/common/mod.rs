//! Common reusable components.

pub mod error_alert;
pub mod footer;
pub mod redirect;
pub mod user_menu;

pub use error_alert::ErrorAlert;
pub use footer::Footer;
pub use redirect::Redirect;
pub use user_menu::UserMenu;
