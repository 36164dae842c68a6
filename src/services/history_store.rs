//! Process-wide store of per-user observation histories.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument};

use crate::domain::models::{Observation, UserHistory, UserId};

/// Shared handle to one user's history
pub type HistoryHandle = Arc<Mutex<UserHistory>>;

/// In-memory history store, one bounded [`UserHistory`] per user.
///
/// Constructed once at startup and shared behind an `Arc`. The outer map is
/// only locked long enough to look up or insert a handle; every
/// read-modify-write of a single history runs under that user's mutex, so
/// concurrent updates for the same user serialize and different users do
/// not wait on each other.
///
/// Entries are never evicted: memory grows with the number of distinct
/// users for the lifetime of the process.
#[derive(Debug, Default)]
pub struct HistoryStore {
    users: RwLock<HashMap<UserId, HistoryHandle>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's history handle, creating an empty history on first use
    pub async fn get_or_create(&self, user: UserId) -> HistoryHandle {
        if let Some(handle) = self.users.read().await.get(&user) {
            return Arc::clone(handle);
        }

        let mut users = self.users.write().await;
        Arc::clone(users.entry(user).or_insert_with(|| {
            debug!(%user, "creating empty history");
            Arc::new(Mutex::new(UserHistory::new()))
        }))
    }

    /// Appends `values` stamped with `at` and trims to the most recent
    /// observations.
    ///
    /// Returns the history as it stood right after this append, taken under
    /// the same lock so the caller analyzes exactly what it wrote.
    #[instrument(skip(self, values), fields(count = values.len()))]
    pub async fn append(&self, user: UserId, values: &[f64], at: DateTime<Utc>) -> Vec<Observation> {
        let handle = self.get_or_create(user).await;
        let mut history = handle.lock().await;
        history.extend_at(values, at);
        debug!(len = history.len(), "history updated");
        history.to_vec()
    }

    /// Replaces the user's history with an empty one
    #[instrument(skip(self))]
    pub async fn reset(&self, user: UserId) {
        let handle = self.get_or_create(user).await;
        handle.lock().await.clear();
    }

    /// Copy of the user's history; empty for unknown users.
    ///
    /// Does not create an entry.
    pub async fn snapshot(&self, user: UserId) -> Vec<Observation> {
        let handle = self.users.read().await.get(&user).map(Arc::clone);
        match handle {
            Some(handle) => handle.lock().await.to_vec(),
            None => Vec::new(),
        }
    }

    /// Number of users with a history entry
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::HISTORY_CAPACITY;

    #[tokio::test]
    async fn test_get_or_create_returns_same_handle() {
        let store = HistoryStore::new();
        let first = store.get_or_create(UserId(1)).await;
        let second = store.get_or_create(UserId(1)).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_of_unknown_user_is_empty_and_not_created() {
        let store = HistoryStore::new();
        assert!(store.snapshot(UserId(9)).await.is_empty());
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_append_empty_only_ensures_existence() {
        let store = HistoryStore::new();
        let snapshot = store.append(UserId(3), &[], Utc::now()).await;

        assert!(snapshot.is_empty());
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_append_returns_trimmed_snapshot() {
        let store = HistoryStore::new();
        let values: Vec<f64> = (0..60).map(f64::from).collect();
        let snapshot = store.append(UserId(1), &values, Utc::now()).await;

        assert_eq!(snapshot.len(), HISTORY_CAPACITY);
        assert!((snapshot[0].value - 10.0).abs() < f64::EPSILON);
        assert_eq!(snapshot, store.snapshot(UserId(1)).await);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = HistoryStore::new();
        store.append(UserId(1), &[1.0, 2.0], Utc::now()).await;
        store.append(UserId(2), &[5.0], Utc::now()).await;
        store.reset(UserId(1)).await;

        assert!(store.snapshot(UserId(1)).await.is_empty());
        assert_eq!(store.snapshot(UserId(2)).await.len(), 1);
    }
}
