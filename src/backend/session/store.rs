//! Shared session cache.
//!
//! One store per app, passed around by handle. Pages read snapshots or
//! subscribe to changes; only [`SessionStore::reset_store`] invalidates it.

use crate::backend::auth::session::{CurrentUser, QueryError, SessionQuery, SharedData};
use crate::backend::auth::signout::QueryCache;
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<SessionQuery>>,
    /// Bumped by every reset; fetches started under an older value are stale.
    generation: Arc<watch::Sender<usize>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a store with nothing loaded yet.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionQuery::pending());
        let (generation, _) = watch::channel(0);
        Self {
            state: Arc::new(state),
            generation: Arc::new(generation),
        }
    }

    pub fn snapshot(&self) -> SessionQuery {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionQuery> {
        self.state.subscribe()
    }

    /// Marks a fetch in flight, keeping whatever data is already known.
    pub fn begin_fetch(&self) {
        self.state.send_if_modified(|query| {
            let changed = !query.loading;
            query.loading = true;
            changed
        });
    }

    /// Stores the outcome of a current-user fetch.
    pub fn resolve(&self, result: Result<Option<CurrentUser>>) {
        self.state.send_modify(|query| {
            query.loading = false;
            match result {
                Ok(current_user) => {
                    query.data = Some(SharedData { current_user });
                    query.error = None;
                }
                Err(err) => {
                    log::warn!("Session query failed: {err}");
                    query.error = Some(QueryError::from(err));
                }
            }
        });
    }

    /// Applies a pushed "current user updated" payload. Ignored unless a
    /// user is signed in, so a late push cannot resurrect a session.
    pub fn user_updated(&self, user: CurrentUser) {
        self.state.send_if_modified(|query| match query.data.as_mut() {
            Some(SharedData {
                current_user: Some(current),
            }) if current.id == user.id => {
                let changed = *current != user;
                *current = user;
                changed
            }
            _ => {
                log::debug!("Dropping user update for {} outside its session", user.id);
                false
            }
        });
    }

    /// Clears everything and asks the fetch driver to load again.
    pub fn reset_store(&self) {
        self.state.send_replace(SessionQuery::pending());
        self.generation.send_modify(|generation| *generation += 1);
        log::info!("Session cache reset");
    }

    pub fn reset_count(&self) -> usize {
        *self.generation.borrow()
    }

    /// Fetch loop: loads the session, then waits for a reset before loading
    /// again. A fetch that a reset overtakes is discarded and started over.
    /// Runs until the owning task is dropped.
    pub async fn drive<F, Fut>(&self, mut fetch: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<CurrentUser>>>,
    {
        let mut resets = self.generation.subscribe();
        loop {
            let generation = *resets.borrow_and_update();
            self.begin_fetch();
            let result = fetch().await;

            if self.reset_count() != generation {
                log::debug!("Discarding session fetch from before a reset");
                continue;
            }
            self.resolve(result);

            if resets.changed().await.is_err() {
                return;
            }
        }
    }
}

impl QueryCache for SessionStore {
    fn reset_store(&self) {
        SessionStore::reset_store(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::session::{SessionState, UserRole};
    use crate::backend::auth::session::fixtures::user;
    use crate::simple_error;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[test]
    fn starts_pending() {
        let store = SessionStore::new();
        assert_eq!(store.snapshot(), SessionQuery::pending());
        assert_eq!(store.reset_count(), 0);
    }

    #[test]
    fn resolve_success_and_failure() {
        let store = SessionStore::new();
        store.resolve(Ok(Some(user(UserRole::User))));
        assert_eq!(store.snapshot(), SessionQuery::signed_in(user(UserRole::User)));

        store.begin_fetch();
        assert!(store.snapshot().loading);
        assert!(store.snapshot().current_user().is_some());

        store.resolve(Err(simple_error!("offline")));
        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, Some(QueryError::new("offline")));
        // Stale data survives a failed refetch
        assert!(snapshot.current_user().is_some());
    }

    #[test]
    fn user_updates_apply_only_to_the_signed_in_user() {
        let store = SessionStore::new();
        let mut renamed = user(UserRole::User);
        renamed.name = Some("Alicia".to_string());

        store.user_updated(renamed.clone());
        assert_eq!(store.snapshot(), SessionQuery::pending());

        store.resolve(Ok(Some(user(UserRole::User))));
        store.user_updated(renamed.clone());
        assert_eq!(store.snapshot().current_user(), Some(&renamed));

        let mut stranger = renamed.clone();
        stranger.id = "2".to_string();
        store.user_updated(stranger);
        assert_eq!(store.snapshot().current_user(), Some(&renamed));
    }

    #[test]
    fn reset_clears_and_counts() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        store.resolve(Ok(Some(user(UserRole::Admin))));
        rx.borrow_and_update();

        QueryCache::reset_store(&store);

        assert!(rx.has_changed().unwrap());
        assert_eq!(store.snapshot(), SessionQuery::pending());
        assert_eq!(store.reset_count(), 1);
    }

    #[tokio::test]
    async fn drive_refetches_after_reset() {
        let store = SessionStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let driver = {
            let store = store.clone();
            let calls = calls.clone();
            tokio::spawn(async move {
                store
                    .drive(move || {
                        let n = calls.fetch_add(1, Ordering::SeqCst);
                        async move {
                            if n == 0 {
                                Ok(Some(user(UserRole::User)))
                            } else {
                                Ok(None)
                            }
                        }
                    })
                    .await;
            })
        };

        let mut rx = store.subscribe();
        rx.wait_for(|q| q.current_user().is_some()).await.unwrap();

        store.reset_store();
        let query = tokio::time::timeout(
            Duration::from_secs(1),
            rx.wait_for(|q| q.state() == SessionState::Anonymous),
        )
        .await
        .unwrap()
        .unwrap()
        .clone();

        assert_eq!(query, SessionQuery::signed_out());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        driver.abort();
    }

    #[tokio::test]
    async fn fetch_overtaken_by_reset_is_discarded() {
        let store = SessionStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (release, held) = oneshot::channel::<()>();
        let held = Arc::new(Mutex::new(Some(held)));

        let driver = {
            let store = store.clone();
            let calls = calls.clone();
            tokio::spawn(async move {
                store
                    .drive(move || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        let held = held.lock().unwrap().take();
                        async move {
                            match held {
                                // First fetch answers with the old session once released
                                Some(held) => {
                                    let _ = held.await;
                                    Ok(Some(user(UserRole::User)))
                                }
                                // Refetch never answers
                                None => std::future::pending::<Result<Option<CurrentUser>>>().await,
                            }
                        }
                    })
                    .await;
            })
        };

        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(store.snapshot().loading);

        store.reset_store();
        release.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(store.snapshot(), SessionQuery::pending());
        assert!(store.snapshot().current_user().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        driver.abort();
    }
}
