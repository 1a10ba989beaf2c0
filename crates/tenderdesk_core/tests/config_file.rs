use std::path::PathBuf;
use tenderdesk_core::{AppConfig, ConfigError};

#[test]
fn load_reads_toml_file_and_builds_upload_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tenderdesk.toml");
    std::fs::write(
        &path,
        r#"
database_path = "/srv/tenderdesk/tenders.sqlite3"
upload_dir = "/srv/tenderdesk/uploads"
max_upload_bytes = 1048576

[logging]
level = "debug"
dir = "/var/log/tenderdesk"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(
        config.database_path,
        PathBuf::from("/srv/tenderdesk/tenders.sqlite3")
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.dir, Some(PathBuf::from("/var/log/tenderdesk")));

    let policy = config.upload_policy();
    assert_eq!(policy.upload_dir, PathBuf::from("/srv/tenderdesk/uploads"));
    assert_eq!(policy.max_bytes, 1_048_576);
}

#[test]
fn load_or_default_without_path_uses_defaults() {
    let config = AppConfig::load_or_default(None).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn invalid_toml_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "upload_dir = [").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
