//! app-config.sh generation
//!
//! The launcher sources `app-config.sh` at startup. Each line is a plain
//! `KEY="VALUE"` assignment, so values must never contain a double quote.

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::arguments::normalize;
use crate::descriptor::ValidDescriptor;
use crate::error::{Result, descriptor as errors, fs as fs_errors};

/// The application configuration file written into the output directory
pub const APP_CONFIG_FILE: &str = "app-config.sh";

/// Mode of `app-config.sh` on Unix; the launcher may run as another user
#[cfg(unix)]
const CONFIG_MODE: u32 = 0o644;

/// Stands in for the platform classpath separator between classpath entries.
///
/// The launcher assigns the real separator to `CLASSPATH_FROM_CONFIG` before
/// sourcing `app-config.sh`, so the reference expands while the config is
/// read and the assignment then replaces it with the joined classpath. The
/// launcher scripts depend on this exact string.
pub const CLASSPATH_DELIMITER: &str = "${CLASSPATH_FROM_CONFIG}";

pub const KEY_APP_NAME: &str = "APP_NAME";
pub const KEY_APP_TYPE: &str = "APP_TYPE";
pub const KEY_MAIN_METHOD: &str = "APP_MAINMETHOD";
pub const KEY_JVM_ARGS: &str = "APP_JVM_ARGS";
pub const KEY_CLI_ARGS: &str = "APP_CLI_ARGS";
pub const KEY_JAVA_HOME: &str = "APP_JAVA_HOME";
pub const KEY_EXECUTABLE: &str = "APP_EXECUTABLE";
pub const KEY_CLASSPATH: &str = "CLASSPATH_FROM_CONFIG";

/// Rendered configuration, in the order it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    entries: Vec<(&'static str, String)>,
}

impl ConfigRecord {
    /// Build the record for a validated descriptor
    ///
    /// Argument strings are normalized; other values are written as given and
    /// absent ones become empty strings. The classpath key only appears when
    /// there are entries.
    pub fn from_descriptor(valid: &ValidDescriptor<'_>) -> Result<Self> {
        let descriptor = valid.descriptor;
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut entries = vec![
            (KEY_APP_NAME, valid.application_name.to_string()),
            (KEY_APP_TYPE, valid.kind.lowercase()),
            (KEY_MAIN_METHOD, optional(&descriptor.main_entry)),
            (KEY_JVM_ARGS, normalize(descriptor.jvm_args.as_deref())?),
            (KEY_CLI_ARGS, normalize(descriptor.program_args.as_deref())?),
            (KEY_JAVA_HOME, optional(&descriptor.runtime_home)),
            (KEY_EXECUTABLE, optional(&descriptor.executable_path)),
        ];

        if !descriptor.classpath.is_empty() {
            entries.push((KEY_CLASSPATH, descriptor.classpath.join(CLASSPATH_DELIMITER)));
        }

        for (key, value) in &entries {
            if value.contains('"') {
                return Err(errors::unsupported_character_in(*key, value.clone()));
            }
        }

        Ok(Self { entries })
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// One `KEY="VALUE"` line per entry
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\"\n"))
            .collect()
    }
}

/// Write `record` as `app-config.sh` inside `output_dir`
///
/// The content goes to a temporary file in the same directory first and is
/// renamed over the target, so readers never see a partial file.
pub fn emit(record: &ConfigRecord, output_dir: &Path) -> Result<PathBuf> {
    let target = output_dir.join(APP_CONFIG_FILE);
    let write_error =
        |e| fs_errors::io_failure("Could not create application properties file", &target, e);

    let mut file = NamedTempFile::new_in(output_dir).map_err(write_error)?;
    file.write_all(record.render().as_bytes())
        .and_then(|()| file.flush())
        .map_err(write_error)?;
    set_readable(&file).map_err(write_error)?;
    file.persist(&target).map_err(|e| write_error(e.error))?;

    tracing::info!(path = %target.display(), entries = record.entries.len(), "Wrote application config");
    Ok(target)
}

/// Temporary files start out private (0600)
#[cfg(unix)]
fn set_readable(file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.as_file()
        .set_permissions(std::fs::Permissions::from_mode(CONFIG_MODE))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_readable(_file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
