//! Daily challenge engine
//!
//! Selection, completion and streaks for the daily challenge:
//! the catalog maps today's date to a challenge, the completion log
//! records which days were done, and the streak counts consecutive days.
//!
//! ```ignore
//! let log = ChallengeLog::new(FileStore::open_default());
//! let challenge = Catalog::builtin().challenge_for(today)?;
//! log.toggle(today, challenge).await?;
//! let streak = log.streak(today).await;
//! ```

mod catalog;
mod streak;

pub use catalog::{Catalog, CatalogError, DEFAULT_CATALOG_TOML};
pub use streak::current_streak;

use chrono::NaiveDate;

use crate::domain::ChallengeRecord;
use crate::store::{HistoryStore, StoreError, decode_history, encode_history};

/// Store key for the challenge completion history
pub const CHALLENGE_HISTORY_KEY: &str = "challengeHistory";

/// Completion ledger for the daily challenge.
///
/// Holds at most one record per calendar date. The persisted blob is the
/// system of record; every operation re-reads it before deciding.
pub struct ChallengeLog<S> {
    store: S,
}

impl<S: HistoryStore> ChallengeLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All completions in insertion order.
    ///
    /// A failed or malformed read is logged and treated as an empty
    /// history so the rest of the app stays usable.
    pub async fn load(&self) -> Vec<ChallengeRecord> {
        let blob = match self.store.get(CHALLENGE_HISTORY_KEY).await {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("Failed to load challenge history, starting empty: {err}");
                None
            }
        };
        let records: Vec<ChallengeRecord> = decode_history(CHALLENGE_HISTORY_KEY, blob);

        // One record per date; first occurrence wins if a stale blob
        // somehow contains duplicates.
        let mut seen = std::collections::HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(r.date))
            .collect()
    }

    /// Whether a completion record exists for `date`
    pub async fn is_completed(&self, date: NaiveDate) -> bool {
        self.load().await.iter().any(|r| r.date == date)
    }

    /// Complete `date`, or undo a prior completion of it.
    ///
    /// Returns the new completion state for `date`. Calling twice with
    /// the same date restores the original history.
    pub async fn toggle(&self, date: NaiveDate, challenge: &str) -> Result<bool, StoreError> {
        let mut records = self.load().await;

        let completed = if records.iter().any(|r| r.date == date) {
            records.retain(|r| r.date != date);
            false
        } else {
            records.push(ChallengeRecord::new(date, challenge));
            true
        };

        let blob = encode_history(CHALLENGE_HISTORY_KEY, &records)?;
        self.store.set(CHALLENGE_HISTORY_KEY, &blob).await?;
        Ok(completed)
    }

    /// Current consecutive-day streak relative to `today`
    pub async fn streak(&self, today: NaiveDate) -> u32 {
        current_streak(&self.load().await, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let log = ChallengeLog::new(MemoryStore::new());
        let today = date(2024, 6, 1);

        assert!(!log.is_completed(today).await);
        assert!(log.toggle(today, "30 squats").await.unwrap());
        assert!(log.is_completed(today).await);

        assert!(!log.toggle(today, "30 squats").await.unwrap());
        assert!(!log.is_completed(today).await);
        assert!(log.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_keeps_other_dates_intact() {
        let log = ChallengeLog::new(MemoryStore::new());
        log.toggle(date(2024, 6, 1), "a").await.unwrap();
        log.toggle(date(2024, 6, 2), "b").await.unwrap();
        log.toggle(date(2024, 6, 3), "c").await.unwrap();

        log.toggle(date(2024, 6, 2), "b").await.unwrap();

        let records = log.load().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2024, 6, 1));
        assert_eq!(records[1].date, date(2024, 6, 3));
    }

    #[tokio::test]
    async fn test_malformed_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(CHALLENGE_HISTORY_KEY, "not json").await.unwrap();

        let log = ChallengeLog::new(store);
        assert!(log.load().await.is_empty());
        assert_eq!(log.streak(date(2024, 6, 1)).await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_dates_collapse_on_load() {
        let store = MemoryStore::new();
        store
            .set(
                CHALLENGE_HISTORY_KEY,
                r#"[{"date":"2024-06-01","challenge":"a"},{"date":"2024-06-01","challenge":"b"}]"#,
            )
            .await
            .unwrap();

        let log = ChallengeLog::new(store);
        let records = log.load().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].challenge, "a");
    }

    #[tokio::test]
    async fn test_write_failure_surfaces() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);

        let log = ChallengeLog::new(store);
        let err = log.toggle(date(2024, 6, 1), "a").await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
