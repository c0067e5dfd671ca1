//! Runs the access gate for a layout and mounts the live user feed.

use crate::backend::auth::gate::{ChildProps, GateOptions, Outcome, evaluate};
use crate::frontend::app::route::Route;
use crate::frontend::components::common::{ErrorAlert, Redirect};
use crate::frontend::services::context::{use_session, use_shell};
use dioxus::prelude::*;
use dioxus_router::use_route;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct GatedContentProps {
    pub options: GateOptions,
    pub content: Callback<ChildProps, Element>,
    #[props(default)]
    pub no_pad: bool,
}

#[component]
pub fn GatedContent(props: GatedContentProps) -> Element {
    let session = use_session();
    let current_path = use_route::<Route>().to_string();

    let outcome = evaluate(&props.options, &session.read(), &current_path);

    let inner = match outcome {
        Outcome::Redirect(href) => {
            return rsx! {
                Redirect { key: "{href}", href: href.clone() }
            };
        }
        Outcome::ErrorNotice(error) => rsx! { ErrorAlert { error } },
        Outcome::Content(child) => props.content.call(child),
    };

    if props.no_pad {
        inner
    } else {
        rsx! {
            div { class: "standard-width", {inner} }
        }
    }
}

/// Keeps the current user fresh while mounted. Render it only for a
/// signed-in user; unmounting stops the feed.
#[component]
pub fn CurrentUserUpdatedSubscription() -> Element {
    let shell = use_shell();

    use_hook(move || match shell.user_feed() {
        Ok(feed) => Some(Rc::new(feed.start(shell.store.clone()))),
        Err(e) => {
            log::error!("Cannot start current user feed: {e}");
            None
        }
    });

    rsx! {}
}
