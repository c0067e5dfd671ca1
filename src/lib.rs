//! Desktop shell for a GraphQL starter app.
//!
//! `backend` holds the access policy, the session cache and the GraphQL
//! collaborators; `frontend` renders them with Dioxus.

pub mod backend;
pub mod frontend;
pub mod utils;
