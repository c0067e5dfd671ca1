use crate::backend::auth::gate::ChildProps;
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::components::layout::DashLayout;
use dioxus::prelude::*;

#[component]
pub fn Admin() -> Element {
    rsx! {
        DashLayout {
            title: "Administration",
            forbid_when: AuthRestrict::LOGGED_OUT | AuthRestrict::NOT_ADMIN,
            content: move |props: ChildProps| {
                let who = props
                    .current_user
                    .map(|u| u.display_name().to_string())
                    .unwrap_or_default();
                rsx! {
                    section {
                        class: "card",
                        p { "Signed in as administrator {who}." }
                    }
                }
            },
        }
    }
}
