//! Application root.

use crate::frontend::app::route::Route;
use crate::frontend::services::context::use_shell;
use dioxus::prelude::*;
use dioxus_router::Router;

/// Root component. Expects the shell context to be handed to the launcher
/// with `LaunchBuilder::with_context`.
#[component]
pub fn App() -> Element {
    let shell = use_shell();
    let session = use_context_provider(|| Signal::new(shell.store.snapshot()));

    // Loads the session and reloads it after every cache reset
    use_future({
        let shell = shell.clone();
        move || {
            let shell = shell.clone();
            async move {
                let client = shell.client.clone();
                shell
                    .store
                    .drive(move || {
                        let client = client.clone();
                        async move { client.current_user().await }
                    })
                    .await;
            }
        }
    });

    // Mirrors the store into a signal so layouts re-render on change
    use_future(move || {
        let store = shell.store.clone();
        let mut session = session;
        async move {
            let mut updates = store.subscribe();
            loop {
                let snapshot = updates.borrow_and_update().clone();
                session.set(snapshot);
                if updates.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
