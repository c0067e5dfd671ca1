//! Shell-wide context shared through Dioxus.

use crate::backend::auth::gate::BuildProfile;
use crate::backend::auth::session::SessionQuery;
use crate::backend::graphql::{CurrentUserFeed, GraphqlClient};
use crate::backend::routing::RouteEvents;
use crate::backend::session::SessionStore;
use crate::utils::config::ShellConfig;
use crate::utils::error::Result;
use dioxus::prelude::*;
use std::sync::Arc;

/// Everything the layouts need to talk to the outside world.
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub config: Arc<ShellConfig>,
    pub client: GraphqlClient,
    pub store: SessionStore,
    pub events: RouteEvents,
}

impl ShellContext {
    pub fn new(config: ShellConfig) -> Result<Self> {
        let client = GraphqlClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
            store: SessionStore::new(),
            events: RouteEvents::new(),
        })
    }

    pub fn profile(&self) -> BuildProfile {
        self.config.build_profile()
    }

    pub fn user_feed(&self) -> Result<CurrentUserFeed> {
        Ok(CurrentUserFeed::for_client(
            &self.client,
            self.config.websocket_url()?,
        ))
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}

/// Reactive view of the session cache.
pub fn use_session() -> Signal<SessionQuery> {
    use_context::<Signal<SessionQuery>>()
}
