//! Bundled launcher resources
//!
//! The bundle is the read-only set of scripts shipped with the generator,
//! addressed by fixed logical paths. The default bundle is compiled into
//! the binary; a directory on disk can stand in for it.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::{Result, bundle as errors, fs as fs_errors};

/// Archive holding the common script tree, unpacked as a whole
pub const COMMON_SCRIPTS: &str = "scripts-bundled/common-scripts.zip";

/// Generic launcher script, copied under the user's script name
pub const DAEMON_SCRIPT: &str = "scripts-bundled/daemon";

/// Prefix of the per-kind extension scripts (`daemon-java`, ...)
pub const DAEMON_SCRIPT_EXTENSION_PREFIX: &str = "scripts-bundled/daemon-";

/// Logical path of the extension script for a lower-cased kind name
pub fn extension_resource(kind_name: &str) -> String {
    format!("{DAEMON_SCRIPT_EXTENSION_PREFIX}{kind_name}")
}

/// Source of bundled resources
pub trait ResourceBundle {
    /// Read a resource by its logical path
    ///
    /// Unknown paths fail with `ResourceNotFound`.
    fn open(&self, logical_path: &str) -> Result<Cow<'_, [u8]>>;
}

/// Resources compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundle;

const EMBEDDED: &[(&str, &[u8])] = &[
    (
        COMMON_SCRIPTS,
        include_bytes!(concat!(env!("OUT_DIR"), "/common-scripts.zip")),
    ),
    (
        DAEMON_SCRIPT,
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/scripts-bundled/daemon")),
    ),
    (
        "scripts-bundled/daemon-java",
        include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/scripts-bundled/daemon-java"
        )),
    ),
    (
        "scripts-bundled/daemon-executable",
        include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/scripts-bundled/daemon-executable"
        )),
    ),
];

impl ResourceBundle for EmbeddedBundle {
    fn open(&self, logical_path: &str) -> Result<Cow<'_, [u8]>> {
        EMBEDDED
            .iter()
            .find(|(path, _)| *path == logical_path)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
            .ok_or_else(|| errors::resource_not_found(logical_path))
    }
}

/// Resources read from a directory laid out like the bundle
///
/// The directory stands in for the bundle root, so `scripts-bundled/daemon`
/// resolves to `<root>/daemon`.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, logical_path: &str) -> PathBuf {
        let relative = logical_path
            .strip_prefix("scripts-bundled/")
            .unwrap_or(logical_path);
        self.root.join(relative)
    }
}

impl ResourceBundle for DirectoryBundle {
    fn open(&self, logical_path: &str) -> Result<Cow<'_, [u8]>> {
        let path = self.resolve(logical_path);
        if !path.is_file() {
            return Err(errors::resource_not_found(logical_path));
        }

        std::fs::read(&path)
            .map(Cow::Owned)
            .map_err(|e| fs_errors::io_failure("Failed to read bundled resource", &path, e))
    }
}
