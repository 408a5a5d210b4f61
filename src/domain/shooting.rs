use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved shooting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingRecord {
    /// Unique identifier within the shooting history
    pub id: String,
    pub name: String,
    /// Local calendar day (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    pub makes: u32,
    pub attempts: u32,
    /// Shooting percentage frozen at save time, one decimal (e.g. "75.0")
    pub percentage: String,
}

/// In-memory counter for a shooting session in progress.
///
/// Tracks makes and attempts until the session is saved or reset.
/// Nothing is persisted until [`ShotTracker::finish`] produces a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotTracker {
    makes: u32,
    attempts: u32,
}

impl ShotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shot attempt, made or missed
    pub fn record_shot(&mut self, made: bool) {
        self.attempts += 1;
        if made {
            self.makes += 1;
        }
    }

    /// Discard all shots and start over
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn makes(&self) -> u32 {
        self.makes
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// True when no shots have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.attempts == 0
    }

    /// Current shooting percentage as a one-decimal string
    pub fn percentage(&self) -> String {
        shooting_percentage(self.makes, self.attempts)
    }

    /// Freeze the current counters into a record and reset the tracker.
    ///
    /// Falls back to "Shooting Session on {date}" when no name is given.
    pub fn finish(&mut self, name: Option<String>, date: NaiveDate) -> ShootingRecord {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => format!("Shooting Session on {date}"),
        };
        let record = ShootingRecord {
            id: Uuid::new_v4().to_string(),
            name,
            date,
            makes: self.makes,
            attempts: self.attempts,
            percentage: self.percentage(),
        };
        self.reset();
        record
    }
}

/// Percentage of made shots, one decimal. "0.0" when no attempts.
pub fn shooting_percentage(makes: u32, attempts: u32) -> String {
    if attempts == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", f64::from(makes) / f64::from(attempts) * 100.0)
    }
}
