//! GoGym - local-first fitness tracking
//!
//! Three domains, each persisted as one JSON blob in a local key-value
//! history store and viewable as history:
//!
//! 1. **Daily challenge**: each calendar day selects one challenge from a
//!    fixed catalog; completions are toggleable and feed a
//!    consecutive-day streak.
//!
//! 2. **Workouts**: named sessions of exercises with ordered sets
//!    (reps and weight).
//!
//! 3. **Shooting**: basketball shooting sessions with makes, attempts and
//!    the percentage frozen at save time.

pub mod challenge;
pub mod domain;
pub mod sessions;
pub mod store;

pub use domain::*;
