//! In-memory session store implementation using `DashMap`.
//!
//! This is the test and demo backend - data is lost on process restart.
//! The production service implements [`SessionStore`] against its document
//! store.

use dashmap::DashMap;

use super::{Session, SessionStore};
use crate::Result;

/// In-memory session store using a lock-free concurrent hashmap.
///
/// Thread-safe; sessions are stored and returned by value, so a `get`
/// hands out an independent copy that must be written back with `update`.
///
/// # Example
///
/// ```rust
/// use trial_track::session::{MemorySessionStore, Session, SessionStore};
///
/// # async fn example() -> trial_track::Result<()> {
/// let store = MemorySessionStore::new();
/// store.update(Session::builder("sess-1", "subject-1").build()).await?;
/// assert!(store.get("sess-1").await?.is_some());
/// # Ok(())
/// # }
/// ```
pub struct MemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl MemorySessionStore {
    /// Create a new empty in-memory session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Get the number of sessions in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Clear all sessions.
    pub fn clear(&self) {
        self.sessions.clear();
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.get(session_id).map(|s| s.value().clone()))
    }

    async fn update(&self, session: Session) -> Result<()> {
        self.sessions
            .insert(session.session_id().to_string(), session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_session() {
        let store = MemorySessionStore::new();
        assert!(store.get("sess-unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let store = MemorySessionStore::new();
        let session = Session::builder("sess-1", "subject-1").build();

        store.update(session.clone()).await.unwrap();
        let fetched = store.get("sess-1").await.unwrap().expect("stored session");
        assert_eq!(fetched, session);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces() {
        let store = MemorySessionStore::new();
        store
            .update(Session::builder("sess-1", "subject-1").build())
            .await
            .unwrap();
        store
            .update(Session::builder("sess-1", "subject-2").build())
            .await
            .unwrap();

        let fetched = store.get("sess-1").await.unwrap().unwrap();
        assert_eq!(fetched.subject_id(), "subject-2");
        assert_eq!(store.len(), 1);
    }
}
