//! Integration tests for logging sets through to sessions and export.

use chrono::{Duration, TimeZone, Utc};
use fitcoach::export::{export_hevy_csv, HevyExportOptions};
use fitcoach::progress::{ProgressError, Trend};
use fitcoach::storage::keys::exercise_progress_key;
use fitcoach::storage::SessionStore;
use fitcoach::{Database, ProgressTracker, WorkoutSession, WorkoutSet};

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 8, 18, 0, 0).unwrap()
}

#[test]
fn test_logged_sets_drive_progress() {
    let db = Database::open_in_memory().unwrap();
    let tracker = ProgressTracker::new(&db);

    for week in 0..10 {
        let weight = 80.0 + 2.5 * week as f64;
        let set = WorkoutSet::new("bench", weight, 5).logged_at(start() + Duration::weeks(week));
        tracker.log_set(&set).unwrap();
    }

    let progress = tracker.progress_for("bench").unwrap();
    assert_eq!(progress.total_sets, 10);
    assert_eq!(progress.max_weight, 102.5);
    assert_eq!(progress.trend, Trend::Increasing);

    let cached = tracker.cached_progress("bench").unwrap().unwrap();
    assert_eq!(cached, progress);
    assert!(db.get_raw(&exercise_progress_key("bench")).unwrap().is_some());
}

#[test]
fn test_history_is_append_only() {
    let db = Database::open_in_memory().unwrap();
    let tracker = ProgressTracker::new(&db);

    let first = WorkoutSet::new("row", 60.0, 10).logged_at(start());
    tracker.log_set(&first).unwrap();
    tracker
        .log_set(&WorkoutSet::new("row", 65.0, 8).logged_at(start() + Duration::minutes(3)))
        .unwrap();

    let sets = tracker.sets_for("row").unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0], first);
}

#[test]
fn test_invalid_sets_are_not_stored() {
    let db = Database::open_in_memory().unwrap();
    let tracker = ProgressTracker::new(&db);

    let result = tracker.log_set(&WorkoutSet::new("squat", -20.0, 5));
    assert!(matches!(result, Err(ProgressError::InvalidSet(_))));

    let result = tracker.log_set(&WorkoutSet::new("squat", 100.0, 5).with_rpe(11.0));
    assert!(matches!(result, Err(ProgressError::InvalidSet(_))));

    assert!(tracker.sets_for("squat").unwrap().is_empty());
    assert!(tracker.tracked_exercises().unwrap().is_empty());
}

#[test]
fn test_sets_to_session_to_export() {
    let db = Database::open_in_memory().unwrap();
    let tracker = ProgressTracker::new(&db);

    tracker
        .log_set(&WorkoutSet::new("squat", 100.0, 5).logged_at(start()))
        .unwrap();
    tracker
        .log_set(&WorkoutSet::new("deadlift", 140.0, 3).logged_at(start() + Duration::minutes(20)))
        .unwrap();

    let mut exercises = tracker.tracked_exercises().unwrap();
    exercises.sort();
    assert_eq!(exercises, vec!["deadlift", "squat"]);

    let mut sets = Vec::new();
    for id in &exercises {
        sets.extend(tracker.sets_for(id).unwrap());
    }
    sets.sort_by_key(|s| s.logged_at);

    let session = WorkoutSession::from_sets("Lower", sets).unwrap();
    let store = SessionStore::new(&db);
    store.save(&session).unwrap();

    let stored = store.all().unwrap();
    assert_eq!(stored, vec![session]);

    let csv = export_hevy_csv(&stored, &HevyExportOptions::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2024-04-08 18:00:00,squat,1,100,5,"));
    assert!(lines[2].starts_with("2024-04-08 18:00:00,deadlift,1,140,3,"));

    let score = tracker.strength_score(start() + Duration::hours(1)).unwrap();
    assert_eq!(score.consistency, 5.0);
    assert!(score.total > score.consistency);
}

#[test]
fn test_repeated_session_does_not_duplicate_sets() {
    let db = Database::open_in_memory().unwrap();
    let tracker = ProgressTracker::new(&db);
    let store = SessionStore::new(&db);

    tracker
        .log_set(&WorkoutSet::new("bench", 80.0, 5).logged_at(start()))
        .unwrap();
    tracker
        .log_set(&WorkoutSet::new("bench", 82.5, 5).logged_at(start() + Duration::minutes(4)))
        .unwrap();

    let pending = store.unsaved_sets(tracker.sets_for("bench").unwrap()).unwrap();
    let morning = WorkoutSession::from_sets("Push", pending).unwrap();
    store.save(&morning).unwrap();

    // Nothing new since the first session
    let pending = store.unsaved_sets(tracker.sets_for("bench").unwrap()).unwrap();
    assert!(WorkoutSession::from_sets("Push again", pending).is_none());

    tracker
        .log_set(&WorkoutSet::new("bench", 85.0, 3).logged_at(start() + Duration::hours(6)))
        .unwrap();
    let pending = store.unsaved_sets(tracker.sets_for("bench").unwrap()).unwrap();
    let evening = WorkoutSession::from_sets("Top set", pending).unwrap();
    assert_eq!(evening.completed_set_count(), 1);
    store.save(&evening).unwrap();

    let csv = export_hevy_csv(&store.all().unwrap(), &HevyExportOptions::default()).unwrap();
    assert_eq!(csv.lines().count(), 4);
}
