//! Signed-in user dropdown for the marketing layout.

use crate::backend::auth::session::CurrentUser;
use crate::frontend::services::menu::MenuState;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[derive(Props, Clone, PartialEq)]
pub struct UserMenuProps {
    pub user: CurrentUser,
    pub on_logout: EventHandler<()>,
}

#[component]
pub fn UserMenu(props: UserMenuProps) -> Element {
    let nav = navigator();
    let mut menu = use_signal(MenuState::default);
    let user = props.user;
    let on_logout = props.on_logout;

    let initial = user.initial();
    let display_name = user.display_name().to_string();
    let verified = user.is_verified;
    let organizations: Vec<(String, String, String, bool)> = user
        .organizations()
        .map(|(org, is_owner)| {
            (org.slug.clone(), format!("/o/{}", org.slug), org.name.clone(), is_owner)
        })
        .collect();

    let go = move |path: String| {
        let mut menu = menu;
        menu.set(MenuState::Closed);
        nav.push(path);
    };

    rsx! {
        div {
            class: "user-menu",
            span {
                class: "user-menu-trigger",
                onclick: move |_| menu.with_mut(|m| m.toggle()),
                span { class: "avatar", "{initial}" }
                span {
                    class: if verified { "user-name" } else { "user-name warn" },
                    "{display_name}"
                }
                span { class: "caret", "▾" }
            }

            if menu().is_open() {
                ul {
                    class: "user-menu-items",
                    for (slug, target, name, is_owner) in organizations {
                        li {
                            key: "{slug}",
                            class: "user-menu-item",
                            onclick: move |_| go(target.clone()),
                            "{name}"
                            if is_owner {
                                span { class: "owner-crown", title: "Owner", " ♛" }
                            }
                        }
                    }
                    li {
                        class: "user-menu-item",
                        onclick: move |_| go("/create-organization".to_string()),
                        "Create organization"
                    }
                    li {
                        class: if verified { "user-menu-item" } else { "user-menu-item warn" },
                        onclick: move |_| go("/settings".to_string()),
                        "Settings"
                    }
                    li {
                        class: "user-menu-item",
                        onclick: move |_| {
                            menu.set(MenuState::Closed);
                            on_logout.call(());
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
