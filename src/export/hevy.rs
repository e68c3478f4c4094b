//! Hevy-compatible CSV export of workout history.

use chrono::{DateTime, Utc};
use std::io::Write;

use super::types::{ExportError, HevyExportOptions};
use crate::workouts::WorkoutSession;

/// Column header expected by Hevy's importer.
pub const HEVY_HEADER: &str =
    "Date,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Name,Workout Notes";

/// Date format used in the `Date` column.
pub const HEVY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export sessions to Hevy CSV, one row per completed set.
pub fn export_hevy_csv(
    sessions: &[WorkoutSession],
    options: &HevyExportOptions,
) -> Result<String, ExportError> {
    if sessions.iter().all(|s| s.completed_set_count() == 0) {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    // Write header
    let header = if options.include_rpe {
        format!("{},RPE", HEVY_HEADER)
    } else {
        HEVY_HEADER.to_string()
    };
    writeln!(output, "{}", header).map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    let mut rows = 0usize;
    for session in sessions {
        let date = session.started_at.format(HEVY_DATE_FORMAT).to_string();
        let workout_name = escape_csv(&session.name);
        let workout_notes = escape_csv(session.notes.as_deref().unwrap_or(""));

        for exercise in &session.exercises {
            let exercise_name = escape_csv(&exercise.name);
            let notes = escape_csv(exercise.notes.as_deref().unwrap_or(""));

            for (index, set) in exercise.completed_sets().enumerate() {
                write!(
                    output,
                    "{},{},{},{},{},,{},{},{},{}",
                    date,
                    exercise_name,
                    index + 1,
                    set.weight,
                    set.reps,
                    set.duration.map_or(String::new(), |v| v.to_string()),
                    notes,
                    workout_name,
                    workout_notes,
                )
                .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

                if options.include_rpe {
                    write!(
                        output,
                        ",{}",
                        set.rpe.map_or(String::new(), |v| v.to_string())
                    )
                    .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
                }

                writeln!(output).map_err(|e| ExportError::WriteFailed(e.to_string()))?;
                rows += 1;
            }
        }
    }

    tracing::debug!("Exported {} sets from {} sessions", rows, sessions.len());

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export sessions to Hevy CSV and write to a file.
pub fn export_hevy_csv_to_file(
    sessions: &[WorkoutSession],
    options: &HevyExportOptions,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = export_hevy_csv(sessions, options)?;
    std::fs::write(path, content)?;
    tracing::info!("Wrote Hevy export to {}", path.display());
    Ok(())
}

/// Generate a default filename for a Hevy export.
pub fn generate_hevy_filename(now: DateTime<Utc>) -> String {
    format!("FitCoach_Hevy_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
