//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mapgrid operations
#[derive(Debug, Error)]
pub enum Error {
    /// The levels directory is missing under the installation root.
    /// Distinct from a levels directory that simply contains no maps.
    #[error("levels directory not found: {}", path.display())]
    MissingLevels { path: PathBuf },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
