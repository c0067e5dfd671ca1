use crate::backend::auth::gate::{ChildProps, safe_next};
use crate::backend::auth::restrict::AuthRestrict;
use crate::frontend::components::layout::SharedLayout;
use crate::frontend::services::context::use_shell;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Login(next: String) -> Element {
    rsx! {
        SharedLayout {
            title: "Sign in",
            forbid_when: AuthRestrict::LOGGED_IN,
            content: move |_: ChildProps| rsx! { LoginForm { next: next.clone() } },
        }
    }
}

#[component]
fn LoginForm(next: String) -> Element {
    let shell = use_shell();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }

        let shell = shell.clone();
        let target = safe_next(&next);
        let (user, pass) = (username(), password());
        submitting.set(true);
        error.set(None);

        spawn(async move {
            match shell.client.login(&user, &pass).await {
                Ok(()) => {
                    shell.store.reset_store();
                    nav.replace(target);
                }
                Err(e) => {
                    log::warn!("Login failed: {e}");
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: on_submit,
            input {
                class: "input",
                r#type: "text",
                placeholder: "Username or email",
                autofocus: true,
                value: "{username}",
                oninput: move |e| username.set(e.value()),
            }
            input {
                class: "input",
                r#type: "password",
                placeholder: "Passphrase",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            button {
                class: "button",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in…" } else { "Sign in" }
            }
        }
    }
}
