//! Routed frame around every page.

use crate::frontend::app::route::Route;
use crate::frontend::services::context::use_shell;
use crate::frontend::services::signout::use_sign_out_worker;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, router, use_route};

/// Reports completed navigations and hosts the sign-out worker, so both
/// outlive the individual pages.
#[component]
pub fn ShellFrame() -> Element {
    let shell = use_shell();
    let nav = navigator();
    let route = use_route::<Route>();
    let path = route.to_string();

    use_sign_out_worker(shell.clone(), nav, router());

    let events = shell.events.clone();
    use_effect(use_reactive((&path,), move |(path,)| {
        events.change_complete(&path);
    }));

    rsx! {
        Outlet::<Route> {}
    }
}
