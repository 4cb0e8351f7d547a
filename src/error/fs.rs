//! File system errors

use std::path::Path;

use super::DaemonError;

/// Creates an IO failure error for an operation on a path
pub fn io_failure(operation: impl Into<String>, path: &Path, source: std::io::Error) -> DaemonError {
    DaemonError::IoFailure {
        operation: operation.into(),
        path: path.display().to_string(),
        source,
    }
}

/// Creates a cleanup failure error for a transient file
pub fn cleanup_failure(path: &Path, source: std::io::Error) -> DaemonError {
    DaemonError::CleanupFailure {
        path: path.display().to_string(),
        source,
    }
}
