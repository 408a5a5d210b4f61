//! File-backed history store
//!
//! One JSON file per key under the data directory (~/.gogym by default).
//! Writes use an exclusive lock plus temp-file-and-rename so a crash
//! mid-save never leaves a half-written history behind.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;

use super::{HistoryStore, StoreError};

/// History store writing one `{key}.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Get the default data directory path (~/.gogym/)
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gogym")
    }

    /// Create a store over the default data directory
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// Create a store over a specific directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl HistoryStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.blob_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;
        write_atomic(&self.blob_path(key), blob).map_err(write_err)
    }
}

/// Write a blob with an exclusive lock and atomic rename.
///
/// The lock file is separate from the blob to survive the rename; the
/// lock is released when the handle is dropped.
fn write_atomic(path: &Path, blob: &str) -> std::io::Result<()> {
    let lock_path = path.with_extension("json.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;

    let temp_path = path.with_extension("json.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;

    temp_file.write_all(blob.as_bytes())?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}
