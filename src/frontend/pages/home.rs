use crate::backend::auth::gate::ChildProps;
use crate::frontend::app::route::Route;
use crate::frontend::components::layout::{DashLayout, SharedLayout};
use crate::frontend::services::context::{use_session, use_shell};
use dioxus::prelude::*;
use dioxus_router::components::Link;

/// Dashboard for signed-in users, landing page for everyone else.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let signed_in = session.read().current_user().is_some();

    if signed_in {
        rsx! {
            DashLayout {
                title: "Welcome",
                content: move |props: ChildProps| rsx! { Dashboard { child: props } },
            }
        }
    } else {
        rsx! {
            SharedLayout {
                title: "",
                content: move |props: ChildProps| rsx! { Landing { loading: props.loading } },
            }
        }
    }
}

#[component]
fn Dashboard(child: ChildProps) -> Element {
    let Some(user) = child.current_user else {
        return rsx! { p { class: "muted", "Loading…" } };
    };
    let name = user.display_name().to_string();
    let org_count = user.organization_memberships.nodes.len();

    rsx! {
        section {
            class: "card",
            h2 { "Hello, {name}" }
            p {
                "You belong to {org_count} organization(s). "
                Link { to: Route::CreateOrganization {}, "Create another" }
            }
            if !user.is_verified {
                p { class: "warn", "Your email address is not verified yet." }
            }
        }
    }
}

#[component]
fn Landing(loading: bool) -> Element {
    let shell = use_shell();
    let project = shell.config.project_name.clone();

    rsx! {
        section {
            class: "hero",
            h1 { "Welcome to {project}" }
            p {
                "A starting point for your next project, with accounts, "
                "organizations and a GraphQL API ready to go."
            }
            if loading {
                p { class: "muted", "Checking your session…" }
            } else {
                Link { to: Route::Login { next: "/".to_string() }, class: "button", "Get started" }
            }
        }
    }
}
