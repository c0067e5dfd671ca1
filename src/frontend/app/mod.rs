pub mod main;
pub mod route;

pub use main::App;
pub use route::Route;
