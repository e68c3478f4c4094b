//! Export types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for the Hevy CSV export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HevyExportOptions {
    /// Append an `RPE` column
    pub include_rpe: bool,
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No completed sets to export
    #[error("No completed sets to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
