//! Frontend services: shared context, UI state and the sign-out wiring.

pub mod context;
pub mod menu;
pub mod signout;
