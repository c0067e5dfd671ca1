use dioxus::prelude::*;
use dioxus_router::navigator;

/// Replaces the current route with `href` once mounted.
#[component]
pub fn Redirect(href: String) -> Element {
    let nav = navigator();

    use_effect(move || {
        log::debug!("Redirecting to {href}");
        nav.replace(href.clone());
    });

    rsx! {
        div { class: "redirect", "Redirecting…" }
    }
}
