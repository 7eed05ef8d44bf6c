//! Unified error type for the loadprep pipeline
//!
//! [`PrepError`] covers every fatal condition a run can hit. Data-quality
//! problems inside the raw file are not errors: offending rows are dropped
//! by the importer and never surface here.
//!
//! # Example
//!
//! ```ignore
//! use loadprep_core::{PrepError, PrepResult};
//!
//! fn locate(path: &Path) -> PrepResult<()> {
//!     if !path.exists() {
//!         return Err(PrepError::ArchiveNotFound { path: path.to_path_buf() });
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all loadprep operations.
#[derive(Error, Debug)]
pub enum PrepError {
    /// The input archive does not exist on disk
    #[error("Input zip not found: {}", path.display())]
    ArchiveNotFound { path: PathBuf },

    /// Extraction produced no `.txt` file
    #[error("No .txt file found after extraction in {}", dir.display())]
    NoRawTextFile { dir: PathBuf },

    /// The raw file header lacks one of the selected columns
    #[error("Column '{column}' not found in header of {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// The archive exists but could not be read
    #[error("Archive error: {0}")]
    Archive(String),

    /// CSV reader/writer failures that are not plain I/O
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid distribution parameters for the synthetic generator
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// I/O errors (file access, directory creation, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using PrepError.
pub type PrepResult<T> = Result<T, PrepError>;

impl PrepError {
    /// True for the file-not-found family: a missing archive, an extraction
    /// without a text file, or an I/O `NotFound`.
    pub fn is_not_found(&self) -> bool {
        match self {
            PrepError::ArchiveNotFound { .. } | PrepError::NoRawTextFile { .. } => true,
            PrepError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
