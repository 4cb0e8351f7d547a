//! Common test utilities for daemon-gen integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the generate command reads descriptor fields from
const DESCRIPTOR_ENV: &[&str] = &[
    "DAEMON_DESCRIPTOR",
    "DAEMON_BUNDLE_DIR",
    "DAEMON_APP_TYPE",
    "DAEMON_OUTPUT_DIRECTORY",
    "DAEMON_APPLICATION_NAME",
    "DAEMON_SCRIPT_NAME",
    "DAEMON_MAIN_METHOD",
    "DAEMON_EXECUTABLE_FILE",
    "DAEMON_JAVA_HOME",
    "DAEMON_JVM_ARGS",
    "DAEMON_APP_ARGS",
    "DAEMON_CLASSPATH",
];

/// A scratch project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a Java descriptor file generating into `out/`
    pub fn write_java_descriptor(&self, name: &str) -> PathBuf {
        self.write_file(
            name,
            r"appType: JAVA
outputDirectory: out
applicationName: example
scriptName: app.sh
mainMethod: com.example.Main
javaHome: /usr/lib/jvm/x
jvmArgs: |
  -Xmx512m
  -Dfoo=bar
classpath:
  - a.jar
  - b.jar
",
        );
        self.path.join(name)
    }

    /// Lay out a bundle directory from the repository's scripts, with the
    /// common scripts packed into `common-scripts.zip`
    pub fn create_bundle_dir(&self, target: &str) -> PathBuf {
        let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts-bundled");
        let target_path = self.path.join(target);
        std::fs::create_dir_all(&target_path).expect("Failed to create bundle directory");

        for script in ["daemon", "daemon-java", "daemon-executable"] {
            std::fs::copy(source.join(script), target_path.join(script))
                .expect("Failed to copy bundled script");
        }

        let file = std::fs::File::create(target_path.join("common-scripts.zip"))
            .expect("Failed to create archive");
        let mut zip = zip::ZipWriter::new(file);
        add_dir_to_zip(&mut zip, &source.join("common-scripts"), "");
        zip.finish().expect("Failed to finish archive");

        target_path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// daemon-gen command running inside `dir` with no descriptor environment
#[allow(deprecated)]
pub fn daemon_gen_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daemon-gen").expect("daemon-gen binary not built");
    cmd.current_dir(dir);
    for var in DESCRIPTOR_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add_dir_to_zip(zip: &mut zip::ZipWriter<std::fs::File>, dir: &Path, prefix: &str) {
    let options = zip::write::FileOptions::default().unix_permissions(0o755);

    for entry in std::fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read directory entry").path();
        let name = format!(
            "{}{}",
            prefix,
            path.file_name().expect("entry has a name").to_string_lossy()
        );

        if path.is_dir() {
            zip.add_directory(format!("{name}/"), options)
                .expect("Failed to add directory");
            add_dir_to_zip(zip, &path, &format!("{name}/"));
        } else {
            zip.start_file(name, options).expect("Failed to add file");
            let content = std::fs::read(&path).expect("Failed to read file");
            zip.write_all(&content).expect("Failed to write file");
        }
    }
}
