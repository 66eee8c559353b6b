//! Error handling for the energy atlas data stores.
//!
//! Load-time failures are reported through [`AtlasError`]. Query-time failures
//! are never errors: every lookup that cannot produce a value returns the
//! [`NotAvailable`] sentinel instead.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Text shown to users wherever a value cannot be produced
pub const NOT_AVAILABLE: &str = "ERROR - data not available";

/// Specialized error type for loading scenario data
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A workbook could not be opened or decoded
    #[error("Workbook error in {path}: {message}")]
    Workbook {
        /// Workbook path
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// A CSV file could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An expected source file does not exist
    #[error("Source file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A background load task panicked or was aborted
    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A caller passed a value outside the known vocabulary
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure of a load pass, as seen by each caller that joined it
    #[error(transparent)]
    Load(Arc<AtlasError>),
}

impl AtlasError {
    /// Create a workbook error for the given path
    pub fn workbook(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::Workbook {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error means a source file was absent
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        match self {
            Self::MissingFile(_) => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::Load(e) => e.is_missing_file(),
            _ => false,
        }
    }
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// The single "no data" outcome of a query.
///
/// Not loaded yet, a missing parameter, a missing key at any level, an empty
/// cell and an unparsable number all collapse to this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("ERROR - data not available")]
pub struct NotAvailable;

/// Result of a query against a loaded store
pub type QueryResult<T> = std::result::Result<T, NotAvailable>;
