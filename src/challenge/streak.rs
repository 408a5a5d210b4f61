//! Consecutive-day completion streak
//!
//! A streak runs backwards from today: today's completion counts (gap 0),
//! yesterday chains (gap 1), and any gap of two or more days ends it.

use chrono::NaiveDate;

use crate::domain::ChallengeRecord;

/// Count consecutive completed days ending today or yesterday.
pub fn current_streak(records: &[ChallengeRecord], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    // The ledger forbids duplicate dates; dropping equal neighbours here
    // keeps a duplicate from ever counting twice.
    dates.dedup();

    let mut cursor = today;
    let mut streak = 0;
    for date in dates {
        let diff = (cursor - date).num_days();
        if diff == 0 || diff == 1 {
            streak += 1;
            cursor = date;
        } else {
            break;
        }
    }
    streak
}
