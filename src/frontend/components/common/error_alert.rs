use crate::backend::auth::session::QueryError;
use crate::frontend::services::context::use_shell;
use dioxus::prelude::*;

/// Development-only notice for a failed session query.
#[component]
pub fn ErrorAlert(error: QueryError) -> Element {
    let shell = use_shell();

    rsx! {
        div {
            class: "error-alert",
            role: "alert",
            h3 { class: "error-alert-title", "Unexpected error occurred" }
            p { class: "error-alert-message", "{error}" }
            button {
                class: "error-alert-retry",
                onclick: move |_| shell.store.reset_store(),
                "Try again"
            }
        }
    }
}
