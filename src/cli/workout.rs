//! Workout commands

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Subcommand;

use gogym::domain::{Exercise, ExerciseSet, WorkoutRecord};
use gogym::sessions::workout_log;
use gogym::store::FileStore;

#[derive(Subcommand)]
pub enum WorkoutCommand {
    /// Save a workout
    Log {
        /// Workout name (defaults to "Workout on {date}")
        #[arg(long)]
        name: Option<String>,

        /// Exercise spec "Name:REPSxWEIGHT,REPSxWEIGHT,..." (repeatable,
        /// e.g. --exercise "Bench Press:10x135,8x145")
        #[arg(long = "exercise", required = true)]
        exercises: Vec<String>,
    },

    /// Show workout history, latest first
    History,

    /// Delete a workout by id
    Delete { id: String },
}

pub async fn run(command: WorkoutCommand, store: FileStore) -> Result<()> {
    let log = workout_log(store);

    match command {
        WorkoutCommand::Log { name, exercises } => {
            let exercises = exercises
                .iter()
                .map(|spec| parse_exercise(spec))
                .collect::<Result<Vec<_>>>()?;

            let today = Local::now().date_naive();
            let workout = WorkoutRecord::new(name, today, exercises);
            let summary = format!("{} ({})", workout.name, workout.id);

            log.append(workout)
                .await
                .context("Failed to save workout")?;
            println!("Workout saved: {summary}");
        }
        WorkoutCommand::History => {
            let records = log.list().await;
            if records.is_empty() {
                println!("No saved workouts yet.");
                return Ok(());
            }

            for workout in records.iter().rev() {
                println!("{}  {}  [{}]", workout.date, workout.name, workout.id);
                for exercise in &workout.exercises {
                    println!("  {}", exercise.name);
                    for set in &exercise.sets {
                        println!("    • {} reps @ {} lbs", set.reps, set.weight);
                    }
                }
                println!();
            }
        }
        WorkoutCommand::Delete { id } => {
            let removed = log.remove(&id).await.context("Failed to save workout history")?;
            if removed {
                println!("Deleted workout {id}");
            } else {
                println!("No workout with id {id}");
            }
        }
    }

    Ok(())
}

/// Parse "Name:10x135,8x145" into an exercise with ordered sets.
///
/// A set without an "x" is reps only; the weight is left blank, matching
/// the free-form entry fields.
fn parse_exercise(spec: &str) -> Result<Exercise> {
    let Some((name, sets_spec)) = spec.split_once(':') else {
        bail!("Invalid exercise spec '{spec}', expected \"Name:REPSxWEIGHT,...\"");
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Exercise name must not be empty in '{spec}'");
    }

    let sets = sets_spec
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|set| match set.split_once('x') {
            Some((reps, weight)) => ExerciseSet {
                reps: reps.trim().to_string(),
                weight: weight.trim().to_string(),
            },
            None => ExerciseSet {
                reps: set.to_string(),
                weight: String::new(),
            },
        })
        .collect::<Vec<_>>();

    if sets.is_empty() {
        bail!("Exercise '{name}' has no sets");
    }

    Ok(Exercise::new(name, sets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exercise_with_sets() {
        let exercise = parse_exercise("Bench Press:10x135, 8x145").unwrap();
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.sets.len(), 2);
        assert_eq!(exercise.sets[0].reps, "10");
        assert_eq!(exercise.sets[0].weight, "135");
        assert_eq!(exercise.sets[1].reps, "8");
        assert_eq!(exercise.sets[1].weight, "145");
    }

    #[test]
    fn test_parse_reps_only_set() {
        let exercise = parse_exercise("Pull-ups:12").unwrap();
        assert_eq!(exercise.sets[0].reps, "12");
        assert_eq!(exercise.sets[0].weight, "");
    }

    #[test]
    fn test_parse_rejects_bad_specs() {
        assert!(parse_exercise("no sets here").is_err());
        assert!(parse_exercise(":10x135").is_err());
        assert!(parse_exercise("Squats:").is_err());
    }
}
