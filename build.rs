//! Packs `scripts-bundled/common-scripts/` into `common-scripts.zip` under
//! `OUT_DIR`, where the binary picks it up with `include_bytes!`.

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::FileOptions;

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let bundled = manifest_dir.join("scripts-bundled");
    let common_root = bundled.join("common-scripts");

    if !common_root.is_dir() {
        panic!(
            "Common scripts directory not found: {}",
            common_root.display()
        );
    }

    println!("cargo:rerun-if-changed={}", bundled.display());

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR missing"));
    let archive_path = out_dir.join("common-scripts.zip");
    write_archive(&common_root, &archive_path);
}

fn write_archive(root: &Path, archive_path: &Path) {
    let file = File::create(archive_path)
        .unwrap_or_else(|err| panic!("Failed to create {}: {}", archive_path.display(), err));
    let mut zip = zip::ZipWriter::new(file);

    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("Failed to walk {}: {}", root.display(), err))
                .into_path()
        })
        .collect();
    entries.sort();

    for path in &entries {
        println!("cargo:rerun-if-changed={}", path.display());

        let name = entry_name(root, path);
        let options = FileOptions::default().unix_permissions(unix_mode(path));

        if path.is_dir() {
            zip.add_directory(format!("{}/", name), options)
                .unwrap_or_else(|err| panic!("Failed to add directory {}: {}", name, err));
            continue;
        }

        let content = fs::read(path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err));
        zip.start_file(name.clone(), options)
            .unwrap_or_else(|err| panic!("Failed to add {}: {}", name, err));
        zip.write_all(&content)
            .unwrap_or_else(|err| panic!("Failed to write {}: {}", name, err));
    }

    zip.finish()
        .unwrap_or_else(|err| panic!("Failed to finish {}: {}", archive_path.display(), err));
}

/// Archive entry names always use `/`, whatever the host separator is.
fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path
        .strip_prefix(root)
        .unwrap_or_else(|err| panic!("{} is outside {}: {}", path.display(), root.display(), err));

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn unix_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o777)
        .unwrap_or(0o644)
}

#[cfg(not(unix))]
fn unix_mode(path: &Path) -> u32 {
    if path.is_dir() || path.extension().is_some_and(|ext| ext == "sh") {
        0o755
    } else {
        0o644
    }
}
