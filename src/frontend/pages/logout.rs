use crate::frontend::app::route::Route;
use crate::frontend::services::context::use_shell;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Hard logout. Ends the session through the server's logout route,
/// discards every cached query and starts again from home.
#[component]
pub fn Logout() -> Element {
    let shell = use_shell();
    let nav = navigator();

    use_hook(move || {
        spawn(async move {
            if let Err(e) = shell.client.force_logout().await {
                log::error!("Server logout failed: {e}");
            }
            shell.store.reset_store();
            nav.replace(Route::Home {});
        })
    });

    rsx! {
        div { class: "logout", "Logging out…" }
    }
}
