use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single completed daily challenge.
///
/// The completion ledger holds at most one record per calendar date;
/// toggling a date that already has a record removes it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    /// Local calendar day the challenge was completed on (serialized as YYYY-MM-DD)
    pub date: NaiveDate,

    /// The challenge text that was active on that day
    pub challenge: String,
}

impl ChallengeRecord {
    pub fn new(date: NaiveDate, challenge: impl Into<String>) -> Self {
        Self {
            date,
            challenge: challenge.into(),
        }
    }
}
