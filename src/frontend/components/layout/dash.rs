//! Dashboard layout: top bar, sidebar and a mobile menu.

use crate::backend::auth::gate::{ChildProps, GateOptions};
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::app::route::Route;
use crate::frontend::components::layout::gate::{CurrentUserUpdatedSubscription, GatedContent};
use crate::frontend::services::context::{use_session, use_shell};
use crate::frontend::services::menu::MenuState;
use crate::frontend::services::signout::use_sign_out;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[derive(Props, Clone, PartialEq)]
pub struct DashLayoutProps {
    #[props(into, default)]
    pub title: String,
    #[props(default)]
    pub no_handle_errors: bool,
    #[props(default)]
    pub forbid_when: AuthRestrict,
    pub content: Callback<ChildProps, Element>,
}

#[component]
pub fn DashLayout(props: DashLayoutProps) -> Element {
    let shell = use_shell();
    let session = use_session();
    let mut menu = use_signal(MenuState::default);
    let sign_out = use_sign_out();
    let mobile_sign_out = sign_out.clone();

    let options = GateOptions::new(props.forbid_when, shell.profile())
        .no_handle_errors(props.no_handle_errors);
    let page_title = shell.config.page_title(&props.title);
    let current_user = session.read().current_user().cloned();
    let is_admin = current_user.as_ref().is_some_and(|u| u.is_admin());
    let (display_name, username, initial) = current_user
        .as_ref()
        .map(|u| (u.display_name().to_string(), u.username.clone(), u.initial()))
        .unwrap_or_default();

    rsx! {
        document::Title { "{page_title}" }

        div {
            class: "dash",
            if current_user.is_some() {
                CurrentUserUpdatedSubscription {}
            }

            header {
                class: "dash-header",
                div {
                    class: "dash-logo",
                    Link { to: Route::Home {}, "{shell.config.project_name}" }
                }

                button {
                    class: "dash-menu-button",
                    r#type: "button",
                    aria_expanded: "{menu().is_open()}",
                    onclick: move |_| menu.with_mut(|m| m.toggle()),
                    span { class: "sr-only", "Open main menu" }
                    if menu().is_open() { "✕" } else { "☰" }
                }

                nav {
                    class: "dash-nav",
                    aria_label: "Global",
                    Link { to: Route::Home {}, class: "dash-nav-item", "Home" }
                    Link { to: Route::Settings {}, class: "dash-nav-item", "Settings" }
                    if is_admin {
                        Link { to: Route::Admin {}, class: "dash-nav-item", "Admin" }
                    }
                }

                if current_user.is_some() {
                    div {
                        class: "dash-user",
                        span { class: "avatar", "{initial}" }
                        span { class: "dash-user-name", "{display_name}" }
                        button {
                            class: "dash-sign-out",
                            onclick: move |_| sign_out(),
                            "Sign out"
                        }
                    }
                }
            }

            if menu().is_open() {
                nav {
                    class: "dash-mobile-menu",
                    onclick: move |_| menu.set(MenuState::Closed),
                    Link { to: Route::Home {}, class: "dash-mobile-item", "Home" }
                    Link { to: Route::Settings {}, class: "dash-mobile-item", "Settings" }
                    if is_admin {
                        Link { to: Route::Admin {}, class: "dash-mobile-item", "Admin" }
                    }
                    if current_user.is_some() {
                        div {
                            class: "dash-mobile-user",
                            div { class: "dash-user-name", "{display_name}" }
                            div { class: "dash-user-handle", "@{username}" }
                        }
                        button {
                            class: "dash-mobile-item",
                            onclick: move |_| mobile_sign_out(),
                            "Sign out"
                        }
                    }
                }
            }

            div {
                class: "dash-body",
                nav {
                    class: "dash-sidebar",
                    aria_label: "Sidebar",
                    Link { to: Route::Home {}, class: "dash-sidebar-item", "⌂" }
                    Link { to: Route::Settings {}, class: "dash-sidebar-item", "⚙" }
                }
                main {
                    class: "dash-content",
                    if !props.title.is_empty() {
                        h1 { class: "dash-title", "{props.title}" }
                    }
                    GatedContent {
                        options,
                        content: props.content,
                        no_pad: true,
                    }
                }
            }
        }
    }
}
