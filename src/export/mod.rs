//! Workout history export.

pub mod hevy;
pub mod types;

pub use hevy::{export_hevy_csv, export_hevy_csv_to_file, generate_hevy_filename, HEVY_HEADER};
pub use types::{ExportError, HevyExportOptions};
