use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single set within an exercise.
///
/// Reps and weight are kept as free-form numeric strings; the original
/// input fields allow partial entries (e.g. reps without a weight).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub reps: String,
    pub weight: String,
}

/// An exercise and its ordered sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: Vec<ExerciseSet>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }
}

/// A saved workout: named, dated, with its exercises in entry order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier within the workout history
    pub id: String,
    pub name: String,
    /// Local calendar day (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
}

impl WorkoutRecord {
    /// Create a workout record for `date` with a fresh unique id.
    ///
    /// Falls back to "Workout on {date}" when no name is given.
    pub fn new(name: Option<String>, date: NaiveDate, exercises: Vec<Exercise>) -> Self {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => format!("Workout on {date}"),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            date,
            exercises,
        }
    }
}
