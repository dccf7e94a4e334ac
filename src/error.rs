use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience result type for the low-level ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by the CSV and split helpers.
///
/// The ingestion step wraps these into a [`DataIngestionError`] before handing them to callers.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied, disk full).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error (ragged records, invalid UTF-8, or I/O surfaced through the csv crate).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The source had no header row.
    #[error("missing header row")]
    MissingHeader,

    /// The dataset cannot be partitioned with the requested proportion.
    #[error("invalid train/test split: {message}")]
    InvalidSplit { message: String },
}

impl IngestionError {
    /// Returns `true` if the failure came from the filesystem rather than the data.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Csv(err) => matches!(err.kind(), csv::ErrorKind::Io(_)),
            Self::MissingHeader | Self::InvalidSplit { .. } => false,
        }
    }
}

/// Which phase of the ingestion step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source dataset was missing, unreadable, or malformed.
    Load,
    /// An artifact could not be written.
    Write,
    /// Anything else (e.g. the dataset is too small to split).
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Load => "load error",
            Self::Write => "write error",
            Self::Unexpected => "unexpected error",
        };
        f.write_str(s)
    }
}

/// Where a failure was wrapped: the operation, the path it was handling, and the source location.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: &'static str,
    /// Path being read or written when the failure happened.
    pub path: PathBuf,
    /// Source location that wrapped the failure.
    pub location: &'static Location<'static>,
}

impl ErrorContext {
    /// Capture a context at the caller's location.
    #[track_caller]
    pub fn new(operation: &'static str, path: impl AsRef<Path>) -> Self {
        Self {
            operation,
            path: path.as_ref().to_path_buf(),
            location: Location::caller(),
        }
    }
}

/// The single error type surfaced by [`crate::ingestion::DataIngestion`].
///
/// Carries the failing phase, the invocation context, and the original cause.
#[derive(Debug)]
pub struct DataIngestionError {
    kind: ErrorKind,
    context: ErrorContext,
    source: IngestionError,
}

impl DataIngestionError {
    /// Wrap `source`, recording the caller's location in the context.
    #[track_caller]
    pub fn new(
        kind: ErrorKind,
        operation: &'static str,
        path: impl AsRef<Path>,
        source: IngestionError,
    ) -> Self {
        Self {
            kind,
            context: ErrorContext::new(operation, path),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// The underlying failure.
    pub fn cause(&self) -> &IngestionError {
        &self.source
    }
}

impl fmt::Display for DataIngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} [{}:{}] path={}: {}",
            self.kind,
            self.context.operation,
            self.context.location.file(),
            self.context.location.line(),
            self.context.path.display(),
            self.source
        )
    }
}

impl StdError for DataIngestionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> IngestionError {
        IngestionError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
    }

    #[test]
    fn display_names_kind_operation_location_and_cause() {
        let err = DataIngestionError::new(ErrorKind::Load, "read_source", "data/in.csv", not_found());
        let msg = err.to_string();
        assert!(msg.starts_with("load error in read_source ["));
        assert!(msg.contains("error.rs:"));
        assert!(msg.contains("path=data/in.csv"));
        assert!(msg.ends_with("io error: no such file"));
    }

    #[test]
    fn source_is_the_wrapped_cause() {
        let err = DataIngestionError::new(ErrorKind::Write, "write_artifact", "out.csv", not_found());
        let source = StdError::source(&err).unwrap();
        assert_eq!(source.to_string(), "io error: no such file");
        assert!(err.cause().is_io());
        assert_eq!(err.kind(), ErrorKind::Write);
        assert_eq!(err.context().operation, "write_artifact");
    }

    #[test]
    fn split_and_header_errors_are_not_io() {
        let split = IngestionError::InvalidSplit {
            message: "too few rows".to_string(),
        };
        assert!(!split.is_io());
        assert!(!IngestionError::MissingHeader.is_io());
    }
}
