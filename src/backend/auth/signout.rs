//! Sign-out sequence.
//!
//! Home is pushed straight away; the logout request and cache reset wait for
//! that navigation to finish so the page being left is not torn down
//! mid-transition. If the request fails, the user is sent to the server's
//! logout route, which always ends the session.

use crate::backend::auth::gate::{HOME_PATH, LOGOUT_PATH};
use crate::backend::routing::events::RouteEvents;
use crate::utils::error::Result;
use std::future::Future;

/// Ends the session on the server.
pub trait SessionBackend {
    fn logout(&self) -> impl Future<Output = Result<()>>;
}

/// Cached query state that must be dropped after logout.
pub trait QueryCache {
    fn reset_store(&self);
}

pub trait Navigation {
    /// In-app navigation.
    fn push(&self, path: &str);

    /// Full reload at `path`, discarding in-app state.
    fn hard_redirect(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutOutcome {
    /// Logged out in-app and the cache was reset.
    Soft,
    /// The request failed; a hard redirect to the logout route was issued.
    Hard { error: String },
    /// Navigation never completed because the router went away.
    Abandoned,
}

/// Runs the sign-out sequence.
///
/// Dropping the returned future before it finishes releases the navigation
/// listener and skips the remaining steps.
pub async fn sign_out<B, C, N>(
    backend: &B,
    cache: &C,
    navigation: &N,
    events: &RouteEvents,
) -> SignOutOutcome
where
    B: SessionBackend,
    C: QueryCache,
    N: Navigation,
{
    // Register before navigating so a synchronous completion is not missed
    let listener = events.subscribe();
    navigation.push(HOME_PATH);

    let Some(path) = listener.next_complete().await else {
        log::warn!("Router closed before logout could run");
        return SignOutOutcome::Abandoned;
    };
    log::debug!("Navigation to {path} completed, logging out");

    match backend.logout().await {
        Ok(()) => {
            cache.reset_store();
            log::info!("Logged out");
            SignOutOutcome::Soft
        }
        Err(e) => {
            log::error!("Logout failed, forcing logout via {LOGOUT_PATH}: {e}");
            navigation.hard_redirect(LOGOUT_PATH);
            SignOutOutcome::Hard {
                error: e.to_string(),
            }
        }
    }
}
