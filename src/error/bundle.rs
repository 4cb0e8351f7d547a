//! Bundled resource errors

use super::DaemonError;

/// Creates a resource not found error
pub fn resource_not_found(path: impl Into<String>) -> DaemonError {
    DaemonError::ResourceNotFound { path: path.into() }
}
