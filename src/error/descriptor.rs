//! Descriptor validation errors

use super::DaemonError;
use crate::descriptor::{ApplicationKind, PARAM_APP_TYPE};

/// Creates the error for a blank or absent application type
pub fn missing_kind() -> DaemonError {
    DaemonError::MissingField {
        parameter: PARAM_APP_TYPE.to_string(),
        message: format!(
            "No value provided for property {}. Supported types: {}",
            PARAM_APP_TYPE,
            ApplicationKind::supported_list()
        ),
    }
}

/// Creates the error for a parameter the application kind cannot do without
pub fn missing_field(parameter: &str, kind: ApplicationKind) -> DaemonError {
    DaemonError::MissingField {
        parameter: parameter.to_string(),
        message: format!("Parameter '{parameter}' is not optional when application type is {kind}"),
    }
}

/// Creates the error for a plain required parameter (independent of the kind)
pub fn required(parameter: &str) -> DaemonError {
    DaemonError::MissingField {
        parameter: parameter.to_string(),
        message: format!("Parameter '{parameter}' is not optional"),
    }
}

/// Creates an unsupported application type error
pub fn unsupported_kind(value: impl Into<String>) -> DaemonError {
    DaemonError::UnsupportedKind {
        value: value.into(),
        property: PARAM_APP_TYPE.to_string(),
        supported: ApplicationKind::supported_list(),
    }
}

/// Creates an unsupported character error for argument strings
pub fn unsupported_character(value: impl Into<String>) -> DaemonError {
    unsupported_character_in("arguments", value)
}

/// Creates an unsupported character error for a named config value
pub fn unsupported_character_in(context: impl Into<String>, value: impl Into<String>) -> DaemonError {
    DaemonError::UnsupportedCharacter {
        context: context.into(),
        value: value.into(),
    }
}

/// Creates an invalid script name error
pub fn invalid_script_name(name: impl Into<String>, reason: impl Into<String>) -> DaemonError {
    DaemonError::InvalidScriptName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Folds collected validation errors: one stays as is, several are grouped
pub fn collect(mut errors: Vec<DaemonError>) -> Option<DaemonError> {
    match errors.len() {
        0 => None,
        1 => errors.pop(),
        _ => Some(DaemonError::MissingFields { fields: errors }),
    }
}
