use crate::backend::auth::gate::ChildProps;
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::components::layout::SharedLayout;
use crate::frontend::services::context::use_shell;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Lowercase, dash-separated slug for an organization name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[component]
pub fn CreateOrganization() -> Element {
    rsx! {
        SharedLayout {
            title: "Create organization",
            forbid_when: AuthRestrict::LOGGED_OUT,
            content: move |_: ChildProps| rsx! { CreateOrganizationForm {} },
        }
    }
}

#[component]
fn CreateOrganizationForm() -> Element {
    let shell = use_shell();
    let nav = navigator();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let slug = slugify(&name.read());

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let org_name = name();
        let org_slug = slugify(&org_name);
        if org_slug.is_empty() || submitting() {
            return;
        }

        let shell = shell.clone();
        submitting.set(true);
        error.set(None);

        spawn(async move {
            match shell.client.create_organization(&org_name, &org_slug).await {
                Ok(slug) => {
                    shell.store.reset_store();
                    nav.push(format!("/o/{slug}"));
                }
                Err(e) => {
                    log::warn!("Creating organization failed: {e}");
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "create-organization-form",
            onsubmit: on_submit,
            input {
                class: "input",
                r#type: "text",
                placeholder: "Organization name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }
            p { class: "muted", "Your organization URL will be /o/{slug}" }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            button {
                class: "button",
                r#type: "submit",
                disabled: submitting() || slug.is_empty(),
                "Create organization"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Acme Corp"), "acme-corp");
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("--"), "");
        assert_eq!(slugify("Über Co"), "ber-co");
    }
}
