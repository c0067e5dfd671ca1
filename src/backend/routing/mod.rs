pub mod events;

pub use events::{RouteEvent, RouteEvents, RouteListener};
