//! Live "current user updated" feed over the `graphql-ws` websocket protocol.

use crate::backend::auth::session::CurrentUser;
use crate::backend::graphql::client::{GraphqlClient, GraphqlError};
use crate::backend::graphql::queries;
use crate::backend::session::SessionStore;
use crate::simple_error;
use crate::utils::error::Result;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

const SUBPROTOCOL: &str = "graphql-ws";
const OPERATION_ID: &str = "1";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage {
    ConnectionAck,
    ConnectionError {
        #[serde(default)]
        payload: Value,
    },
    #[serde(rename = "ka")]
    KeepAlive,
    Data {
        id: String,
        payload: DataPayload,
    },
    Error {
        #[serde(default)]
        payload: Value,
    },
    Complete,
}

#[derive(Debug, Deserialize)]
struct DataPayload {
    data: Option<UpdateData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateData {
    current_user_updated: Option<UserUpdate>,
}

#[derive(Debug, Deserialize)]
struct UserUpdate {
    #[serde(default)]
    event: Option<String>,
    user: Option<CurrentUser>,
}

/// What the feed does with one server frame.
#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Update(Box<CurrentUser>),
    Stop,
}

fn handle_frame(text: &str) -> Step {
    let message: ServerMessage = match serde_json::from_str(text) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("Ignoring unrecognised subscription frame: {e}");
            return Step::Continue;
        }
    };

    match message {
        ServerMessage::ConnectionAck | ServerMessage::KeepAlive => Step::Continue,
        ServerMessage::ConnectionError { payload } => {
            log::warn!("Subscription connection rejected: {payload}");
            Step::Stop
        }
        ServerMessage::Data { id, .. } if id != OPERATION_ID => Step::Continue,
        ServerMessage::Data { payload, .. } => {
            for error in &payload.errors {
                log::warn!("Subscription error: {}", error.message);
            }
            match payload.data.and_then(|d| d.current_user_updated) {
                Some(UserUpdate {
                    user: Some(user),
                    event,
                }) => {
                    log::debug!("Current user updated ({})", event.as_deref().unwrap_or("unknown"));
                    Step::Update(Box::new(user))
                }
                _ => Step::Continue,
            }
        }
        ServerMessage::Error { payload } => {
            log::warn!("Subscription failed: {payload}");
            Step::Stop
        }
        ServerMessage::Complete => Step::Stop,
    }
}

/// Connection details for the current-user feed.
#[derive(Debug, Clone)]
pub struct CurrentUserFeed {
    url: Url,
    cookie: Option<String>,
}

impl CurrentUserFeed {
    pub fn new(url: Url, cookie: Option<String>) -> Self {
        Self { url, cookie }
    }

    /// Feed on the client's endpoint, carrying its session cookie.
    pub fn for_client(client: &GraphqlClient, url: Url) -> Self {
        let cookie = client.cookie_header(client.endpoint());
        Self::new(url, cookie)
    }

    /// Starts the feed in the background. Dropping the guard stops it.
    pub fn start(self, store: SessionStore) -> FeedGuard {
        let handle = tokio::spawn(async move {
            if let Err(e) = self.run(&store).await {
                log::warn!("Current user feed stopped: {e}");
            }
        });
        FeedGuard { handle }
    }

    async fn run(&self, store: &SessionStore) -> Result<()> {
        let mut request = self.url.as_str().into_client_request()?;
        request
            .headers_mut()
            .insert("Sec-WebSocket-Protocol", HeaderValue::from_static(SUBPROTOCOL));
        if let Some(cookie) = &self.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| simple_error!("Invalid cookie header: {}", e))?;
            request.headers_mut().insert("Cookie", value);
        }

        let (socket, _) = connect_async(request).await?;
        let (mut write, mut read) = socket.split();
        log::info!("Current user feed connected to {}", self.url);

        write
            .send(Message::text(
                json!({ "type": "connection_init", "payload": {} }).to_string(),
            ))
            .await?;
        write
            .send(Message::text(
                json!({
                    "id": OPERATION_ID,
                    "type": "start",
                    "payload": {
                        "query": queries::current_user_updated_subscription(),
                        "operationName": "CurrentUserUpdated",
                        "variables": {}
                    }
                })
                .to_string(),
            ))
            .await?;

        while let Some(message) = read.next().await {
            match message? {
                Message::Text(text) => match handle_frame(text.as_str()) {
                    Step::Continue => {}
                    Step::Update(user) => store.user_updated(*user),
                    Step::Stop => break,
                },
                Message::Close(_) => break,
                _ => {}
            }
        }

        // Best effort; the server may already be gone
        let _ = write
            .send(Message::text(
                json!({ "id": OPERATION_ID, "type": "stop" }).to_string(),
            ))
            .await;
        Ok(())
    }
}

/// Owns a running feed; the feed is aborted when this is dropped.
#[derive(Debug)]
pub struct FeedGuard {
    handle: JoinHandle<()>,
}

impl FeedGuard {
    /// Wraps an already spawned task.
    pub fn from_handle(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FeedGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
