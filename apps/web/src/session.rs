//! In-memory page sessions. Each rendered dashboard owns a view-model and
//! an animation controller for as long as the tab keeps posting events.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::animation::AnimationController;
use crate::backend::BackendApi;
use crate::dashboard::Dashboard;

#[derive(Clone)]
pub struct PageSession {
    pub dashboard: Dashboard,
    pub animations: Arc<AnimationController>,
    pub last_seen: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    idle: Duration,
    sessions: Arc<RwLock<HashMap<Uuid, PageSession>>>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Starts a fresh page session. Idle sessions are dropped first.
    pub fn create(&self, backend: Arc<dyn BackendApi>) -> Uuid {
        self.prune(Utc::now());

        let id = Uuid::new_v4();
        let session = PageSession {
            dashboard: Dashboard::new(backend),
            animations: Arc::new(AnimationController::default()),
            last_seen: Utc::now(),
        };
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session);

        debug!("Created page session {id}");
        id
    }

    /// Looks up a session and marks it as seen.
    pub fn get(&self, id: Uuid) -> Option<PageSession> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.get_mut(&id)?;
        session.last_seen = Utc::now();
        Some(session.clone())
    }

    /// Removes sessions not seen since `now - idle`. Returns how many went.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        // an idle window reaching past the earliest date keeps everything
        let Some(cutoff) = now.checked_sub_signed(self.idle) else {
            return 0;
        };
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen >= cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            info!("Pruned {removed} idle page sessions");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::FakeBackend;

    fn backend() -> Arc<dyn BackendApi> {
        Arc::new(FakeBackend::new())
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new(Duration::minutes(30));
        let a = store.create(backend());
        let b = store.create(backend());

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert!(store.get(a).is_some());
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_prune_drops_only_idle_sessions() {
        let store = SessionStore::new(Duration::minutes(30));
        let id = store.create(backend());

        assert_eq!(store.prune(Utc::now() + Duration::minutes(10)), 0);
        assert_eq!(store.prune(Utc::now() + Duration::minutes(31)), 1);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_huge_idle_window_keeps_sessions() {
        let store = SessionStore::new(Duration::minutes(150_000_000_000));
        let id = store.create(backend());
        store.create(backend());

        assert_eq!(store.prune(Utc::now()), 0);
        assert!(store.get(id).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_refreshes_last_seen() {
        let store = SessionStore::new(Duration::minutes(30));
        let id = store.create(backend());
        let first = store.get(id).unwrap().last_seen;
        let second = store.get(id).unwrap().last_seen;
        assert!(second >= first);
    }

    #[tokio::test]
    async fn test_clones_share_view_model() {
        let store = SessionStore::new(Duration::minutes(30));
        let id = store.create(backend());
        let session = store.get(id).unwrap();
        let again = store.get(id).unwrap();

        assert!(session.dashboard.current_role().await.is_none());
        assert!(Arc::ptr_eq(&session.animations, &again.animations));
    }
}
