//! Routed pages.

pub mod admin;
pub mod create_organization;
pub mod home;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod organization;
pub mod settings;

pub use admin::Admin;
pub use create_organization::CreateOrganization;
pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
pub use organization::Organization;
pub use settings::Settings;
