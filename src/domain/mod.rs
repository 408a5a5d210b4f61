//! Core domain types for GoGym

mod challenge;
mod shooting;
mod workout;

pub use challenge::ChallengeRecord;
pub use shooting::{ShootingRecord, ShotTracker};
pub use workout::{Exercise, ExerciseSet, WorkoutRecord};
