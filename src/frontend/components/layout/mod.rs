//! Layout components.

pub mod dash;
pub mod frame;
pub mod gate;
pub mod shared;

pub use dash::DashLayout;
pub use frame::ShellFrame;
pub use gate::{CurrentUserUpdatedSubscription, GatedContent};
pub use shared::SharedLayout;
