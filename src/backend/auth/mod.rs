//! Access policy for pages and the sign-out sequence.

pub mod gate;
pub mod restrict;
pub mod session;
pub mod signout;

pub use gate::{BuildProfile, ChildProps, GateOptions, Outcome, evaluate};
pub use restrict::AuthRestrict;
pub use session::{CurrentUser, SessionQuery, SessionState, UserRole};
pub use signout::{Navigation, QueryCache, SessionBackend, SignOutOutcome, sign_out};
