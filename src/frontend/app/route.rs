//! Application routing.

use crate::frontend::components::layout::ShellFrame;
use crate::frontend::pages::{
    Admin, CreateOrganization, Home, Login, Logout, NotFound, Organization, Settings,
};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ShellFrame)]
        /// Dashboard when signed in, marketing page otherwise.
        #[route("/")]
        Home {},
        /// Login form; `next` is where to go afterwards.
        #[route("/login?:next")]
        Login { next: String },
        /// Hard logout: ends the server session and rebuilds the cache.
        #[route("/logout")]
        Logout {},
        #[route("/settings")]
        Settings {},
        /// Admins only.
        #[route("/admin")]
        Admin {},
        #[route("/o/:slug")]
        Organization { slug: String },
        #[route("/create-organization")]
        CreateOrganization {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
