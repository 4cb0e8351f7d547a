//! Descriptor file errors

use super::DaemonError;

/// Creates a descriptor file not found error
pub fn not_found(path: impl Into<String>) -> DaemonError {
    DaemonError::DescriptorNotFound { path: path.into() }
}

/// Creates a descriptor file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DaemonError {
    DaemonError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
