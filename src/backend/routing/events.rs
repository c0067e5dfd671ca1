//! Navigation event bus.
//!
//! The router reports navigation progress here. Listeners are handles: a
//! listener is registered for as long as its [`RouteListener`] lives, and
//! [`RouteListener::next_complete`] consumes it, so it can fire at most once.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    ChangeStart(String),
    ChangeComplete(String),
}

#[derive(Debug, Clone)]
pub struct RouteEvents {
    sender: broadcast::Sender<RouteEvent>,
}

impl Default for RouteEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn emit(&self, event: RouteEvent) {
        log::debug!("Route event {event:?}");
        // No listeners is the normal case
        let _ = self.sender.send(event);
    }

    pub fn change_start(&self, path: &str) {
        self.emit(RouteEvent::ChangeStart(path.to_string()));
    }

    pub fn change_complete(&self, path: &str) {
        self.emit(RouteEvent::ChangeComplete(path.to_string()));
    }

    /// Registers a listener. Events emitted before this call are not seen.
    pub fn subscribe(&self) -> RouteListener {
        RouteListener {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[derive(Debug)]
pub struct RouteListener {
    receiver: broadcast::Receiver<RouteEvent>,
}

impl RouteListener {
    /// Waits for the next completed navigation and releases the listener.
    ///
    /// Returns `None` if the bus was dropped first.
    pub async fn next_complete(mut self) -> Option<String> {
        loop {
            match self.receiver.recv().await {
                Ok(RouteEvent::ChangeComplete(path)) => return Some(path),
                Ok(RouteEvent::ChangeStart(_)) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Route listener skipped {skipped} events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
