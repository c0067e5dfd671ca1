//! Marketing-style layout: header, user menu, content and footer.

use crate::backend::auth::gate::{ChildProps, GateOptions, login_path};
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::app::route::Route;
use crate::frontend::components::common::{Footer, UserMenu};
use crate::frontend::components::layout::gate::{CurrentUserUpdatedSubscription, GatedContent};
use crate::frontend::services::context::{use_session, use_shell};
use crate::frontend::services::signout::use_sign_out;
use dioxus::prelude::*;
use dioxus_router::{components::Link, use_route};

#[derive(Props, Clone, PartialEq)]
pub struct SharedLayoutProps {
    #[props(into)]
    pub title: String,
    #[props(default)]
    pub title_href: Option<String>,
    #[props(default)]
    pub no_pad: bool,
    #[props(default)]
    pub no_handle_errors: bool,
    #[props(default)]
    pub forbid_when: AuthRestrict,
    pub content: Callback<ChildProps, Element>,
}

#[component]
pub fn SharedLayout(props: SharedLayoutProps) -> Element {
    let shell = use_shell();
    let session = use_session();
    let current_path = use_route::<Route>().to_string();
    let sign_out = use_sign_out();

    let options = GateOptions::new(props.forbid_when, shell.profile())
        .no_handle_errors(props.no_handle_errors);
    let page_title = shell.config.page_title(&props.title);
    let project = shell.config.project_name.clone();
    let title = props.title.clone();
    let current_user = session.read().current_user().cloned();
    let sign_in_href = login_path(&current_path);

    rsx! {
        document::Title { "{page_title}" }

        div {
            class: "layout",
            if current_user.is_some() {
                CurrentUserUpdatedSubscription {}
            }

            header {
                class: "header",
                div {
                    class: "header-project",
                    Link { to: Route::Home {}, "{project}" }
                }
                h3 {
                    class: "header-title",
                    if let Some(href) = props.title_href.clone() {
                        Link { to: href, "{title}" }
                    } else {
                        "{title}"
                    }
                }
                div {
                    class: "header-user",
                    if let Some(user) = current_user {
                        UserMenu {
                            user,
                            on_logout: move |_| sign_out(),
                        }
                    } else if !props.forbid_when.forbids_logged_in() {
                        Link { to: sign_in_href, class: "header-login", "Sign in" }
                    }
                }
            }

            main {
                class: "content",
                GatedContent {
                    options,
                    content: props.content,
                    no_pad: props.no_pad,
                }
            }

            Footer {}
        }
    }
}
