//! Unit tests for Hevy CSV export.

use chrono::{TimeZone, Utc};
use fitcoach::export::{export_hevy_csv, ExportError, HevyExportOptions, HEVY_HEADER};
use fitcoach::workouts::{SessionExercise, WorkoutSession, WorkoutSet};

fn leg_day() -> WorkoutSession {
    let start = Utc.with_ymd_and_hms(2024, 5, 14, 17, 30, 0).unwrap();
    let mut session = WorkoutSession::new("Leg Day", start);
    session.notes = Some("felt strong, new PR".to_string());

    let mut squat = SessionExercise::new("squat", "Squat (Barbell)");
    squat.sets.push(WorkoutSet::new("squat", 100.0, 5).with_rpe(8.0));
    squat.sets.push(WorkoutSet::new("squat", 102.5, 5));
    session.exercises.push(squat);
    session
}

#[test]
fn test_two_sets_make_three_lines() {
    let csv = export_hevy_csv(&[leg_day()], &HevyExportOptions::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEVY_HEADER);
    assert_eq!(
        lines[1],
        "2024-05-14 17:30:00,Squat (Barbell),1,100,5,,,,Leg Day,\"felt strong, new PR\""
    );
    assert_eq!(
        lines[2],
        "2024-05-14 17:30:00,Squat (Barbell),2,102.5,5,,,,Leg Day,\"felt strong, new PR\""
    );
}

#[test]
fn test_rpe_column_when_enabled() {
    let options = HevyExportOptions { include_rpe: true };
    let csv = export_hevy_csv(&[leg_day()], &options).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[0].ends_with(",RPE"));
    assert!(lines[1].ends_with(",8"));
    assert!(lines[2].ends_with(','));
}

#[test]
fn test_incomplete_sets_are_skipped() {
    let mut session = leg_day();
    session.exercises[0].sets[0].completed = false;

    let csv = export_hevy_csv(&[session], &HevyExportOptions::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains(",1,102.5,5,"));
}

#[test]
fn test_no_sessions_is_an_error() {
    let result = export_hevy_csv(&[], &HevyExportOptions::default());
    assert!(matches!(result, Err(ExportError::NoData)));
}
