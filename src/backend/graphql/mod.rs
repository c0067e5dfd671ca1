//! GraphQL collaborators: the HTTP client and the current-user feed.

pub mod client;
pub mod queries;
pub mod subscription;

pub use client::GraphqlClient;
pub use subscription::{CurrentUserFeed, FeedGuard};
