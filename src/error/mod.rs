//! Error types and handling for daemon-gen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Descriptor validation and argument errors
//! - [`bundle`]: Bundled resource errors
//! - [`fs`]: File system errors
//! - [`config`]: Descriptor file errors
//!
//! Every error is terminal: generation stops at the first one that surfaces.

pub mod bundle;
pub mod config;
pub mod descriptor;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for daemon-gen operations
#[derive(Error, Diagnostic, Debug)]
pub enum DaemonError {
    // Descriptor errors
    #[error("{message}")]
    #[diagnostic(
        code(daemon_gen::descriptor::missing_field),
        help("Set the parameter in the descriptor file, the environment or on the command line")
    )]
    MissingField { parameter: String, message: String },

    #[error("{}", join_messages(.fields))]
    #[diagnostic(code(daemon_gen::descriptor::missing_fields))]
    MissingFields {
        #[related]
        fields: Vec<DaemonError>,
    },

    #[error(
        "The '{value}' value provided for property {property} is not supported. Supported types: {supported}"
    )]
    #[diagnostic(code(daemon_gen::descriptor::unsupported_kind))]
    UnsupportedKind {
        value: String,
        property: String,
        supported: String,
    },

    #[error(
        "Double quotes are not supported in {context} - please use single quotes instead. Offending {context} string: {value}"
    )]
    #[diagnostic(
        code(daemon_gen::descriptor::unsupported_character),
        help("Every value in app-config.sh is wrapped in double quotes")
    )]
    UnsupportedCharacter { context: String, value: String },

    #[error("Invalid script name '{name}': {reason}")]
    #[diagnostic(
        code(daemon_gen::descriptor::invalid_script_name),
        help("The script name is a plain file name inside the output directory, e.g. 'my-app.sh'")
    )]
    InvalidScriptName { name: String, reason: String },

    // Bundle errors
    #[error("File '{path}' could not be found in bundle")]
    #[diagnostic(
        code(daemon_gen::bundle::resource_not_found),
        help("Check that --bundle-dir points at a complete scripts-bundled directory")
    )]
    ResourceNotFound { path: String },

    // File system errors
    #[error("{operation} '{path}': {source}")]
    #[diagnostic(code(daemon_gen::fs::io_failure))]
    IoFailure {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not clean-up temp file '{path}': {source}")]
    #[diagnostic(code(daemon_gen::fs::cleanup_failure))]
    CleanupFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Descriptor file errors
    #[error("Descriptor file not found: {path}")]
    #[diagnostic(code(daemon_gen::config::not_found))]
    DescriptorNotFound { path: String },

    #[error("Failed to parse descriptor file {path}: {reason}")]
    #[diagnostic(code(daemon_gen::config::parse_failed))]
    DescriptorParseFailed { path: String, reason: String },
}

fn join_messages(errors: &[DaemonError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_yaml::Error> for DaemonError {
    fn from(err: serde_yaml::Error) -> Self {
        DaemonError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DaemonError>;
