use crate::backend::auth::gate::ChildProps;
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::components::layout::SharedLayout;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    rsx! {
        SharedLayout {
            title: "Settings",
            forbid_when: AuthRestrict::LOGGED_OUT,
            content: move |props: ChildProps| rsx! { Profile { child: props } },
        }
    }
}

#[component]
fn Profile(child: ChildProps) -> Element {
    let Some(user) = child.current_user else {
        return rsx! { p { class: "muted", "Loading…" } };
    };
    let name = user.name.clone().unwrap_or_default();
    let role = if user.is_admin() { "Administrator" } else { "Member" };

    rsx! {
        section {
            class: "card",
            h2 { "Profile" }
            dl {
                dt { "Username" }
                dd { "{user.username}" }
                dt { "Name" }
                dd { "{name}" }
                dt { "Role" }
                dd { "{role}" }
                dt { "Email" }
                dd {
                    if user.is_verified {
                        "Verified"
                    } else {
                        span { class: "warn", "Not verified" }
                    }
                }
            }
        }
    }
}
