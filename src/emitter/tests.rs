#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::descriptor::{Descriptor, validate};
use crate::error::DaemonError;

fn java(output: PathBuf) -> Descriptor {
    Descriptor {
        kind: Some("JAVA".to_string()),
        output_directory: Some(output),
        application_name: Some("billing".to_string()),
        script_name: Some("billing.sh".to_string()),
        main_entry: Some("com.example.Main".to_string()),
        runtime_home: Some("/usr/lib/jvm/x".to_string()),
        jvm_args: Some("-Xmx512m\n-Dfoo=bar".to_string()),
        ..Descriptor::default()
    }
}

fn record(descriptor: &Descriptor) -> Result<ConfigRecord> {
    ConfigRecord::from_descriptor(&validate(descriptor)?)
}

#[test]
fn test_fixed_keys_in_order() {
    let d = java(PathBuf::from("out"));
    let record = record(&d).unwrap();

    let keys: Vec<&str> = record.entries().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "APP_NAME",
            "APP_TYPE",
            "APP_MAINMETHOD",
            "APP_JVM_ARGS",
            "APP_CLI_ARGS",
            "APP_JAVA_HOME",
            "APP_EXECUTABLE",
        ]
    );
    assert_eq!(record.get(KEY_APP_TYPE), Some("java"));
    assert_eq!(record.get(KEY_JVM_ARGS), Some("-Xmx512m -Dfoo=bar"));
}

#[test]
fn test_absent_values_render_empty() {
    let d = java(PathBuf::from("out"));
    let rendered = record(&d).unwrap().render();

    assert!(rendered.contains("APP_EXECUTABLE=\"\"\n"));
    assert!(rendered.contains("APP_CLI_ARGS=\"\"\n"));
    assert!(!rendered.contains("null"));
}

#[test]
fn test_classpath_joined_with_sentinel() {
    let mut d = java(PathBuf::from("out"));
    d.classpath = vec!["a.jar".to_string(), "b.jar".to_string(), "lib/c.jar".to_string()];

    let record = record(&d).unwrap();
    assert_eq!(
        record.get(KEY_CLASSPATH),
        Some("a.jar${CLASSPATH_FROM_CONFIG}b.jar${CLASSPATH_FROM_CONFIG}lib/c.jar")
    );
    assert!(
        record
            .render()
            .ends_with("CLASSPATH_FROM_CONFIG=\"a.jar${CLASSPATH_FROM_CONFIG}b.jar${CLASSPATH_FROM_CONFIG}lib/c.jar\"\n")
    );
}

#[test]
fn test_classpath_key_omitted_without_entries() {
    let d = java(PathBuf::from("out"));
    let record = record(&d).unwrap();

    assert_eq!(record.get(KEY_CLASSPATH), None);
    assert!(!record.render().contains("CLASSPATH_FROM_CONFIG"));
}

#[test]
fn test_executable_record() {
    let d = Descriptor {
        kind: Some("EXECUTABLE".to_string()),
        output_directory: Some(PathBuf::from("out")),
        application_name: Some("worker".to_string()),
        script_name: Some("worker".to_string()),
        executable_path: Some("bin/worker".to_string()),
        program_args: Some("--port 8080\n--verbose".to_string()),
        ..Descriptor::default()
    };

    let record = record(&d).unwrap();
    assert_eq!(record.get(KEY_APP_TYPE), Some("executable"));
    assert_eq!(record.get(KEY_EXECUTABLE), Some("bin/worker"));
    assert_eq!(record.get(KEY_CLI_ARGS), Some("--port 8080 --verbose"));
    assert_eq!(record.get(KEY_MAIN_METHOD), Some(""));
}

#[test]
fn test_double_quotes_in_arguments() {
    let mut d = java(PathBuf::from("out"));
    d.program_args = Some("--name \"x\"".to_string());

    let err = record(&d).unwrap_err();
    assert!(matches!(err, DaemonError::UnsupportedCharacter { .. }));
    assert!(err.to_string().contains("Double quotes are not supported in arguments"));
}

#[test]
fn test_double_quotes_in_other_values() {
    let mut d = java(PathBuf::from("out"));
    d.application_name = Some("my \"app\"".to_string());

    let err = record(&d).unwrap_err();
    assert!(matches!(err, DaemonError::UnsupportedCharacter { .. }));
    assert!(err.to_string().contains("APP_NAME"));
}

#[test]
fn test_write_to_output_directory() {
    let temp = TempDir::new().unwrap();
    let d = java(temp.path().to_path_buf());

    let path = emit(&record(&d).unwrap(), temp.path()).unwrap();
    assert_eq!(path, temp.path().join(APP_CONFIG_FILE));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("APP_NAME=\"billing\"\n"));
    assert!(content.contains("APP_MAINMETHOD=\"com.example.Main\"\n"));
    assert_eq!(content.lines().count(), 7);
}

#[test]
fn test_write_replaces_existing_config_without_leftovers() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(APP_CONFIG_FILE), "OLD=\"value\"\n").unwrap();

    let d = java(temp.path().to_path_buf());
    emit(&record(&d).unwrap(), temp.path()).unwrap();

    let content = std::fs::read_to_string(temp.path().join(APP_CONFIG_FILE)).unwrap();
    assert!(!content.contains("OLD"));

    let files: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(files.len(), 1, "temporary file left behind");
}

#[test]
fn test_write_to_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("does-not-exist");
    let d = java(out.clone());

    let err = emit(&record(&d).unwrap(), &out).unwrap_err();
    assert!(matches!(err, DaemonError::IoFailure { .. }));
    assert!(err.to_string().contains("Could not create application properties file"));
}

#[cfg(unix)]
#[test]
fn test_config_readable_by_other_users() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let d = java(temp.path().to_path_buf());
    let path = emit(&record(&d).unwrap(), temp.path()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_values_written_as_given() {
    let mut d = java(PathBuf::from("out"));
    d.application_name = Some(" billing ".to_string());
    d.runtime_home = Some("/usr/lib/jvm/x ".to_string());

    let record = record(&d).unwrap();
    assert_eq!(record.get(KEY_APP_NAME), Some(" billing "));
    assert_eq!(record.get(KEY_JAVA_HOME), Some("/usr/lib/jvm/x "));
}
