use crate::backend::auth::gate::ChildProps;
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::components::layout::SharedLayout;
use crate::frontend::services::context::use_session;
use dioxus::prelude::*;

#[component]
pub fn Organization(slug: String) -> Element {
    let session = use_session();
    let title = session
        .read()
        .current_user()
        .and_then(|u| u.organizations().find(|(o, _)| o.slug == slug).map(|(o, _)| o.name.clone()))
        .unwrap_or_else(|| slug.clone());
    let title_href = format!("/o/{slug}");

    rsx! {
        SharedLayout {
            title,
            title_href,
            forbid_when: AuthRestrict::LOGGED_OUT,
            content: move |props: ChildProps| rsx! { OrganizationBody { slug: slug.clone(), child: props } },
        }
    }
}

#[component]
fn OrganizationBody(slug: String, child: ChildProps) -> Element {
    let Some(user) = child.current_user else {
        return rsx! { p { class: "muted", "Loading…" } };
    };

    match user.organizations().find(|(o, _)| o.slug == slug) {
        Some((org, is_owner)) => {
            let role = if is_owner { "Owner" } else { "Member" };
            rsx! {
                section {
                    class: "card",
                    h2 { "{org.name}" }
                    p { class: "muted", "/o/{org.slug}" }
                    p { "Your role: {role}" }
                }
            }
        }
        None => rsx! {
            section {
                class: "card",
                p { "Organization not found, or you are not a member." }
            }
        },
    }
}
