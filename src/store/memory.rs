//! In-memory history store for tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{HistoryStore, StoreError};

/// In-memory store. Can be switched to fail writes, to exercise the
/// save-failure paths without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with a write error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().expect("memory store lock poisoned");
        Ok(blobs.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                key: key.to_string(),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        let mut blobs = self.blobs.lock().expect("memory store lock poisoned");
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
