//! Resource extraction into the output directory
//!
//! Extraction is driven by a [`ResourceManifest`], an ordered list of jobs
//! built from the application kind and the script name:
//! 1. Unpack the common script archive in place
//! 2. Copy the generic launcher under the user's script name
//! 3. Copy the kind-specific extension script

mod archive;


use std::path::{Path, PathBuf};

use crate::bundle::{COMMON_SCRIPTS, DAEMON_SCRIPT, ResourceBundle, extension_resource};
use crate::descriptor::ApplicationKind;
use crate::error::{Result, fs as fs_errors};

/// Mode given to copied launcher scripts on Unix
const SCRIPT_MODE: u32 = 0o755;

/// A single extraction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionJob {
    /// Unpack an archive resource, keeping the paths stored in it
    Unpack { resource: String },
    /// Copy a single resource to `destination`, relative to the output directory
    Copy {
        resource: String,
        destination: String,
    },
}

/// Ordered extraction jobs for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceManifest {
    jobs: Vec<ExtractionJob>,
}

impl ResourceManifest {
    pub fn for_kind(kind: ApplicationKind, script_name: &str) -> Self {
        let jobs = vec![
            ExtractionJob::Unpack {
                resource: COMMON_SCRIPTS.to_string(),
            },
            ExtractionJob::Copy {
                resource: DAEMON_SCRIPT.to_string(),
                destination: script_name.to_string(),
            },
            ExtractionJob::Copy {
                resource: extension_resource(&kind.lowercase()),
                destination: extension_script_name(kind),
            },
        ];

        Self { jobs }
    }

    pub fn jobs(&self) -> &[ExtractionJob] {
        &self.jobs
    }
}

/// File name of the extension script for `kind` in the output directory
///
/// Only the final segment of the logical resource path is kept.
pub fn extension_script_name(kind: ApplicationKind) -> String {
    let resource = extension_resource(&kind.lowercase());
    Path::new(&resource)
        .file_name()
        .map_or(resource.clone(), |name| name.to_string_lossy().into_owned())
}

/// Run every job of `manifest` against `output_dir`
///
/// The output directory is created first (parents included, no error if it
/// exists). Returns the files written, in job order.
pub fn extract(
    manifest: &ResourceManifest,
    bundle: &dyn ResourceBundle,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    ensure_dir(output_dir)?;

    let mut written = Vec::new();
    for job in manifest.jobs() {
        match job {
            ExtractionJob::Unpack { resource } => {
                tracing::info!(resource = %resource, "Unpacking bundled archive");
                let bytes = bundle.open(resource)?;
                written.extend(archive::unpack(&bytes, output_dir)?);
            }
            ExtractionJob::Copy {
                resource,
                destination,
            } => {
                let bytes = bundle.open(resource)?;
                let target = output_dir.join(destination);
                tracing::info!(resource = %resource, target = %target.display(), "Copying script");
                copy_script(&bytes, &target)?;
                written.push(target);
            }
        }
    }

    Ok(written)
}

/// Create a directory and its parents; an existing directory is fine
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| fs_errors::io_failure("Cannot create directory", dir, e))
}

fn copy_script(bytes: &[u8], target: &Path) -> Result<()> {
    std::fs::write(target, bytes)
        .map_err(|e| fs_errors::io_failure("Could not copy daemon script into place", target, e))?;
    set_mode(target, SCRIPT_MODE)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| fs_errors::io_failure("Failed to set permissions on", path, e))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
