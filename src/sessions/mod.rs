//! Session history ledgers
//!
//! Workouts and shooting sessions share the same shape: an append-only
//! collection of id-carrying records, persisted whole under one store
//! key, with delete-by-id. One generic ledger covers both.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{ShootingRecord, WorkoutRecord};
use crate::store::{HistoryStore, StoreError, decode_history, encode_history};

/// Store key for the workout history
pub const WORKOUT_HISTORY_KEY: &str = "workoutHistory";

/// Store key for the shooting history
pub const SHOOTING_HISTORY_KEY: &str = "shootingHistory";

/// A history record addressable by its unique id
pub trait SessionEntry {
    fn id(&self) -> &str;
}

impl SessionEntry for WorkoutRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SessionEntry for ShootingRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Append/remove ledger over one history key.
///
/// Records keep their insertion order; consumers reverse for
/// latest-first display.
pub struct SessionLog<S, T> {
    store: S,
    key: &'static str,
    _record: PhantomData<T>,
}

/// Ledger over the workout history
pub fn workout_log<S: HistoryStore>(store: S) -> SessionLog<S, WorkoutRecord> {
    SessionLog::new(store, WORKOUT_HISTORY_KEY)
}

/// Ledger over the shooting history
pub fn shooting_log<S: HistoryStore>(store: S) -> SessionLog<S, ShootingRecord> {
    SessionLog::new(store, SHOOTING_HISTORY_KEY)
}

impl<S, T> SessionLog<S, T>
where
    S: HistoryStore,
    T: SessionEntry + Serialize + DeserializeOwned + Send,
{
    pub fn new(store: S, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    /// All records in insertion order.
    ///
    /// Read failures and malformed blobs are logged and treated as an
    /// empty history.
    pub async fn list(&self) -> Vec<T> {
        let blob = match self.store.get(self.key).await {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("Failed to load '{}', starting empty: {err}", self.key);
                None
            }
        };
        decode_history(self.key, blob)
    }

    /// Append a record and persist the full collection
    pub async fn append(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.list().await;
        records.push(record);
        let blob = encode_history(self.key, &records)?;
        self.store.set(self.key, &blob).await
    }

    /// Remove the record with `id`, if any, and persist the remainder.
    ///
    /// Returns whether a record was removed; an absent id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.list().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let removed = records.len() < before;

        let blob = encode_history(self.key, &records)?;
        self.store.set(self.key, &blob).await?;
        Ok(removed)
    }
}
