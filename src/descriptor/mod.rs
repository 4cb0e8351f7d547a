//! Application descriptor and its validation
//!
//! The descriptor is everything the host build passes in about the
//! application being bootstrapped. It is assembled from up to three layers
//! (descriptor file, environment, command line) and validated once before
//! anything touches the filesystem.

pub mod kind;


use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emitter::APP_CONFIG_FILE;
use crate::error::{
    DaemonError, Result, config as config_errors, descriptor as errors, fs as fs_errors,
};
use crate::extractor::extension_script_name;

pub use kind::ApplicationKind;

/// Descriptor parameter names, as the build passes them in
pub const PARAM_APP_TYPE: &str = "appType";
pub const PARAM_EXECUTABLE: &str = "executableFile";
pub const PARAM_MAIN_METHOD: &str = "mainMethod";
pub const PARAM_JAVA_HOME: &str = "javaHome";
pub const PARAM_OUTPUT_DIRECTORY: &str = "outputDirectory";
pub const PARAM_APPLICATION_NAME: &str = "applicationName";
pub const PARAM_SCRIPT_NAME: &str = "scriptName";

/// The input record describing the application to bootstrap
///
/// Every field is optional at this level so layers can be merged; which
/// ones must be present is decided by [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Descriptor {
    /// Raw application type, parsed into [`ApplicationKind`] by validation
    #[serde(rename = "appType")]
    pub kind: Option<String>,

    pub output_directory: Option<PathBuf>,

    /// Display name, used by the launcher for logging
    pub application_name: Option<String>,

    /// File name the generic launcher script is written under
    pub script_name: Option<String>,

    #[serde(rename = "mainMethod")]
    pub main_entry: Option<String>,

    #[serde(rename = "executableFile")]
    pub executable_path: Option<String>,

    #[serde(rename = "javaHome")]
    pub runtime_home: Option<String>,

    pub jvm_args: Option<String>,

    #[serde(rename = "appArgs")]
    pub program_args: Option<String>,

    /// Additional classpath entries, in order
    #[serde(default)]
    pub classpath: Vec<String>,
}

/// A descriptor that passed validation, with its required fields resolved
#[derive(Debug, Clone, Copy)]
pub struct ValidDescriptor<'a> {
    pub kind: ApplicationKind,
    pub output_directory: &'a Path,
    pub application_name: &'a str,
    pub script_name: &'a str,
    pub descriptor: &'a Descriptor,
}

impl Descriptor {
    /// Parse a descriptor from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a descriptor file
    ///
    /// Parse errors name the file; read errors surface as I/O failures.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_errors::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| fs_errors::io_failure("Failed to read descriptor", path, e))?;

        Self::from_yaml(&content).map_err(|err| match err {
            DaemonError::DescriptorParseFailed { reason, .. } => {
                config_errors::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Overlay `overrides` on top of this descriptor
    ///
    /// Present values in `overrides` win; a non-empty classpath replaces the
    /// base classpath as a whole.
    #[must_use]
    pub fn merge(self, overrides: Descriptor) -> Descriptor {
        Descriptor {
            kind: overrides.kind.or(self.kind),
            output_directory: overrides.output_directory.or(self.output_directory),
            application_name: overrides.application_name.or(self.application_name),
            script_name: overrides.script_name.or(self.script_name),
            main_entry: overrides.main_entry.or(self.main_entry),
            executable_path: overrides.executable_path.or(self.executable_path),
            runtime_home: overrides.runtime_home.or(self.runtime_home),
            jvm_args: overrides.jvm_args.or(self.jvm_args),
            program_args: overrides.program_args.or(self.program_args),
            classpath: if overrides.classpath.is_empty() {
                self.classpath
            } else {
                overrides.classpath
            },
        }
    }
}

/// Blank means absent, empty, or whitespace only
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate a descriptor before any output is produced
///
/// A blank or unknown application type fails immediately. Past that point
/// every missing parameter is collected, so one run reports all of them.
pub fn validate(descriptor: &Descriptor) -> Result<ValidDescriptor<'_>> {
    let kind: ApplicationKind = descriptor
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()?;

    let mut failures: Vec<_> = kind
        .missing_parameters(descriptor)
        .into_iter()
        .map(|param| errors::missing_field(param, kind))
        .collect();

    let output_directory = descriptor
        .output_directory
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty());
    if output_directory.is_none() {
        failures.push(errors::required(PARAM_OUTPUT_DIRECTORY));
    }

    let application_name = required_str(
        descriptor.application_name.as_deref(),
        PARAM_APPLICATION_NAME,
        &mut failures,
    );
    let script_name = required_str(
        descriptor.script_name.as_deref(),
        PARAM_SCRIPT_NAME,
        &mut failures,
    );

    if let Some(err) = errors::collect(failures) {
        return Err(err);
    }

    match (output_directory, application_name, script_name) {
        (Some(output_directory), Some(application_name), Some(script_name)) => {
            check_script_name(script_name, kind)?;
            Ok(ValidDescriptor {
                kind,
                output_directory,
                application_name,
                script_name,
                descriptor,
            })
        }
        // Every None above pushed a failure.
        _ => Err(errors::required(PARAM_OUTPUT_DIRECTORY)),
    }
}

fn required_str<'a>(
    value: Option<&'a str>,
    parameter: &str,
    failures: &mut Vec<DaemonError>,
) -> Option<&'a str> {
    if is_blank(value) {
        failures.push(errors::required(parameter));
        return None;
    }
    value
}

/// The launcher must land directly inside the output directory and must not
/// overwrite another generated file.
fn check_script_name(name: &str, kind: ApplicationKind) -> Result<()> {
    if name.contains(['/', '\\']) {
        return Err(errors::invalid_script_name(
            name,
            "must be a file name, not a path",
        ));
    }

    if name == "." || name == ".." {
        return Err(errors::invalid_script_name(name, "not a file name"));
    }

    if name == APP_CONFIG_FILE || name == extension_script_name(kind) {
        return Err(errors::invalid_script_name(
            name,
            "clashes with a generated file of the same name",
        ));
    }

    Ok(())
}
