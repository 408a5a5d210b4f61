//! Workout and shooting history ledgers against a real file store.

use chrono::NaiveDate;
use tempfile::tempdir;

use gogym::domain::{Exercise, ExerciseSet, ShotTracker, WorkoutRecord};
use gogym::sessions::{shooting_log, workout_log};
use gogym::store::FileStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn push_day(day: u32) -> WorkoutRecord {
    WorkoutRecord::new(
        Some(format!("Push day {day}")),
        date(2024, 6, day),
        vec![Exercise::new(
            "Bench Press",
            vec![
                ExerciseSet {
                    reps: "10".to_string(),
                    weight: "135".to_string(),
                },
                ExerciseSet {
                    reps: "8".to_string(),
                    weight: "145".to_string(),
                },
            ],
        )],
    )
}

#[tokio::test]
async fn test_workout_roundtrip_on_disk() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let log = workout_log(store.clone());
    let saved = vec![push_day(1), push_day(2)];
    for workout in &saved {
        log.append(workout.clone()).await.unwrap();
    }

    // A fresh ledger over the same directory sees identical records
    let reopened = workout_log(store);
    assert_eq!(reopened.list().await, saved);
}

#[tokio::test]
async fn test_workout_delete_by_id() {
    let dir = tempdir().unwrap();
    let log = workout_log(FileStore::new(dir.path()));

    let keep = push_day(1);
    let drop = push_day(2);
    let drop_id = drop.id.clone();
    log.append(keep.clone()).await.unwrap();
    log.append(drop).await.unwrap();

    assert!(log.remove(&drop_id).await.unwrap());
    assert_eq!(log.list().await, vec![keep]);

    // Deleting again is a no-op
    assert!(!log.remove(&drop_id).await.unwrap());
    assert_eq!(log.list().await.len(), 1);
}

#[tokio::test]
async fn test_shooting_session_saved_with_frozen_percentage() {
    let dir = tempdir().unwrap();
    let log = shooting_log(FileStore::new(dir.path()));

    let mut tracker = ShotTracker::new();
    tracker.record_shot(true);
    tracker.record_shot(true);
    tracker.record_shot(false);
    tracker.record_shot(true);

    let record = tracker.finish(Some("Morning threes".to_string()), date(2024, 6, 1));
    log.append(record).await.unwrap();

    let sessions = log.list().await;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].name, "Morning threes");
    assert_eq!(sessions[0].makes, 3);
    assert_eq!(sessions[0].attempts, 4);
    assert_eq!(sessions[0].percentage, "75.0");
    assert!(tracker.is_empty());
}

#[tokio::test]
async fn test_zero_attempt_session_saves_zero_percentage() {
    let dir = tempdir().unwrap();
    let log = shooting_log(FileStore::new(dir.path()));

    let mut tracker = ShotTracker::new();
    let record = tracker.finish(None, date(2024, 6, 1));
    log.append(record).await.unwrap();

    assert_eq!(log.list().await[0].percentage, "0.0");
}

#[tokio::test]
async fn test_ledgers_do_not_interfere() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let workouts = workout_log(store.clone());
    let sessions = shooting_log(store);

    workouts.append(push_day(1)).await.unwrap();
    let mut tracker = ShotTracker::new();
    tracker.record_shot(true);
    sessions
        .append(tracker.finish(None, date(2024, 6, 1)))
        .await
        .unwrap();

    assert_eq!(workouts.list().await.len(), 1);
    assert_eq!(sessions.list().await.len(), 1);

    let workout_id = workouts.list().await[0].id.clone();
    workouts.remove(&workout_id).await.unwrap();

    assert!(workouts.list().await.is_empty());
    assert_eq!(sessions.list().await.len(), 1);
}

#[tokio::test]
async fn test_persisted_blob_matches_original_wire_format() {
    // The stored JSON keeps the original field names so existing
    // histories remain readable.
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let log = shooting_log(store.clone());
    let mut tracker = ShotTracker::new();
    tracker.record_shot(true);
    log.append(tracker.finish(Some("n".to_string()), date(2024, 6, 1)))
        .await
        .unwrap();

    use gogym::store::HistoryStore;
    let blob = store.get("shootingHistory").await.unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let entry = &parsed[0];
    assert_eq!(entry["date"], "2024-06-01");
    assert_eq!(entry["makes"], 1);
    assert_eq!(entry["attempts"], 1);
    assert_eq!(entry["percentage"], "100.0");
    assert!(entry["id"].is_string());
}
