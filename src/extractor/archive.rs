//! Unpacking the common script archive
//!
//! The archive is staged to a transient file outside the bundle before it is
//! opened. The staging file is removed on every exit path; a failure to
//! remove it is reported, unless an earlier error is already on its way out.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::ZipArchive;

use super::ensure_dir;
use crate::error::{DaemonError, Result, fs as fs_errors};
use crate::temp;

pub(super) fn unpack(bytes: &[u8], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut staged = temp::staging_file("common-scripts", ".zip").map_err(|e| {
        fs_errors::io_failure("Failed to create staging file in", &temp::temp_dir_base(), e)
    })?;
    let staged_path = staged.path().to_path_buf();
    tracing::debug!(path = %staged_path.display(), "Staged archive");

    let result = stage(&mut staged, bytes).and_then(|()| unpack_staged(&staged_path, output_dir));
    finish(result, staged)
}

fn stage(staged: &mut NamedTempFile, bytes: &[u8]) -> Result<()> {
    let path = staged.path().to_path_buf();
    let file = staged.as_file_mut();
    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|e| fs_errors::io_failure("Error whilst staging scripts archive", &path, e))
}

/// Remove the staging file, letting an earlier error take precedence
fn finish<T>(result: Result<T>, staged: NamedTempFile) -> Result<T> {
    let path = staged.path().to_path_buf();
    let cleanup = staged
        .close()
        .map_err(|e| fs_errors::cleanup_failure(&path, e));

    match (result, cleanup) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            tracing::warn!("{cleanup_err}");
            Err(err)
        }
    }
}

fn unpack_staged(archive_path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let unpack_error = |e: io::Error| {
        fs_errors::io_failure("Error whilst extracting scripts archive", archive_path, e)
    };

    let file = File::open(archive_path).map_err(unpack_error)?;
    let mut archive = ZipArchive::new(file).map_err(|e| unpack_error(io::Error::other(e)))?;

    let mut written = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| unpack_error(io::Error::other(e)))?;

        let relative = entry
            .enclosed_name()
            .map(Path::to_path_buf)
            .ok_or_else(|| escaping_entry(archive_path, entry.name()))?;
        let target = output_dir.join(&relative);

        if entry.is_dir() {
            ensure_dir(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }

        let mut out = File::create(&target)
            .map_err(|e| fs_errors::io_failure("Failed to write file", &target, e))?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| fs_errors::io_failure("Failed to write file", &target, e))?;
        drop(out);

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            super::set_mode(&target, mode & 0o777)?;
        }

        tracing::debug!(file = %relative.display(), "Unpacked");
        written.push(target);
    }

    Ok(written)
}

fn escaping_entry(archive_path: &Path, name: &str) -> DaemonError {
    fs_errors::io_failure(
        "Error whilst extracting scripts archive",
        archive_path,
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("entry '{name}' escapes the output directory"),
        ),
    )
}
