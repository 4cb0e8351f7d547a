//! Transient staging files
//!
//! Staged files are never created under the current working directory (e.g.
//! when TMPDIR=tmp or TMPDIR=./tmp), which would otherwise leave stray files
//! next to the build.

use std::env;
use std::io;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Returns a directory path suitable for creating transient files.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create an empty staging file named `<prefix>XXXX<suffix>` under
/// [`temp_dir_base`]. The file is removed when the handle is closed or dropped.
pub fn staging_file(prefix: &str, suffix: &str) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(temp_dir_base())
}
