//! History persistence for GoGym
//!
//! Each domain stores its entire history as one JSON blob under a string
//! key ("challengeHistory", "workoutHistory", "shootingHistory"). Ledgers
//! always read the full collection, mutate it in memory, and write the
//! full collection back; there are no partial updates.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Error type for history store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read history key '{key}'")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write history key '{key}'")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed history blob for key '{key}'")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value blob store backing the history ledgers.
///
/// `get` returns `None` when the key has never been written. Both
/// operations suspend; callers await each one before issuing the next
/// mutation for the same key (single-writer, program order).
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: HistoryStore + ?Sized> HistoryStore for &S {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        (**self).set(key, blob).await
    }
}

/// Decode a history blob into records, treating failures as an empty history.
///
/// A read error or malformed blob must not take the app down; the ledger
/// keeps working from an empty collection and the problem is logged.
pub(crate) fn decode_history<T: DeserializeOwned>(key: &str, blob: Option<String>) -> Vec<T> {
    let Some(blob) = blob else {
        return Vec::new();
    };

    match serde_json::from_str(&blob) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!("Malformed history for '{key}', starting empty: {err}");
            Vec::new()
        }
    }
}

/// Encode records for storage
pub(crate) fn encode_history<T: serde::Serialize>(key: &str, records: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(records).map_err(|source| StoreError::Malformed {
        key: key.to_string(),
        source,
    })
}
