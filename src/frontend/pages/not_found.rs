use crate::backend::auth::gate::ChildProps;
use crate::frontend::app::route::Route;
use crate::frontend::components::layout::SharedLayout;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        SharedLayout {
            title: "Page not found",
            content: move |_: ChildProps| rsx! {
                section {
                    class: "card",
                    p { "Nothing lives at {path}." }
                    Link { to: Route::Home {}, "Back home" }
                }
            },
        }
    }
}
