//! Sign-out wiring for the router.
//!
//! Requests go to a coroutine owned by the routed frame, which outlives the
//! page that asked for the logout. The frame going away cancels the
//! coroutine and with it any pending navigation listener.

use crate::backend::auth::signout::{Navigation, SignOutOutcome, sign_out};
use crate::backend::routing::RouteEvents;
use crate::frontend::services::context::ShellContext;
use dioxus::prelude::*;
use dioxus_router::{Navigator, RouterContext};
use futures_util::StreamExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOutRequest;

/// Router-backed [`Navigation`].
#[derive(Clone)]
pub struct ShellNavigator {
    nav: Navigator,
    router: RouterContext,
    events: RouteEvents,
}

impl ShellNavigator {
    pub fn new(nav: Navigator, router: RouterContext, events: RouteEvents) -> Self {
        Self { nav, router, events }
    }
}

impl Navigation for ShellNavigator {
    /// Reports the start of the navigation. Pushing the route already shown
    /// does not change the path, so the frame never reports it; completion
    /// is reported here instead.
    fn push(&self, path: &str) {
        let already_there = self.router.full_route_string() == path;
        self.events.change_start(path);
        self.nav.push(path.to_string());
        if already_there {
            self.events.change_complete(path);
        }
    }

    /// The logout route resets every cache and re-enters the app from
    /// scratch, which is the desktop counterpart of a full page load.
    fn hard_redirect(&self, path: &str) {
        self.nav.replace(path.to_string());
    }
}

/// Starts the sign-out worker. Call once, from a scope under the router.
pub fn use_sign_out_worker(
    shell: ShellContext,
    nav: Navigator,
    router: RouterContext,
) -> Coroutine<SignOutRequest> {
    use_coroutine(move |mut requests: UnboundedReceiver<SignOutRequest>| {
        let shell = shell.clone();
        async move {
            let navigation = ShellNavigator::new(nav, router, shell.events.clone());
            while requests.next().await.is_some() {
                let outcome =
                    sign_out(&shell.client, &shell.store, &navigation, &shell.events).await;
                if let SignOutOutcome::Hard { error } = &outcome {
                    log::warn!("Fell back to hard logout: {error}");
                }
            }
        }
    })
}

/// Handler for "Logout" buttons.
pub fn use_sign_out() -> impl Fn() + Clone {
    let worker = use_coroutine_handle::<SignOutRequest>();
    move || worker.send(SignOutRequest)
}
