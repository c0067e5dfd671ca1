//! Headless core: access policy, session cache, routing events and the
//! GraphQL collaborators. Nothing here depends on the UI framework.

pub mod auth;
pub mod graphql;
pub mod routing;
pub mod session;
