//! 설정 및 DI 와이어링 통합 테스트.
//!
//! 설정 파일 → 어댑터 생성 → 도구 호출 검증.

use maclauncher_core::config_file::ConfigFile;
use maclauncher_platform::{FsDirectoryReader, SystemProcessRunner};
use maclauncher_tools::{ApplicationLauncher, ToolRegistry};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn default_config_file_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigFile::open(temp_dir.path().join("config.json"))
        .unwrap()
        .into_config();

    assert!(config.launcher.applications_dir.is_absolute());
    assert!(!config.launcher.bundle_suffix.is_empty());
    assert!(!config.launcher.open_command.is_empty());
    assert!(!config.server.version.is_empty());
}

#[tokio::test]
async fn configured_directory_flows_into_listing() {
    let temp_dir = TempDir::new().unwrap();
    let apps_dir = temp_dir.path().join("apps");
    std::fs::create_dir_all(apps_dir.join("Terminal.app")).unwrap();
    std::fs::create_dir_all(apps_dir.join("Utilities")).unwrap();

    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        json!({ "launcher": { "applications_dir": apps_dir } }).to_string(),
    )
    .unwrap();
    let config = ConfigFile::open(config_path).unwrap().into_config();

    let launcher = ApplicationLauncher::new(
        Arc::new(FsDirectoryReader),
        Arc::new(SystemProcessRunner),
        config.launcher,
    );
    let registry = ToolRegistry::new(launcher);

    let result = registry
        .call("list_applications", Some(json!({})))
        .await
        .unwrap();
    assert_eq!(result, json!({ "applications": ["Terminal.app"] }));
}

#[tokio::test]
async fn missing_open_command_reports_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "launcher": { "open_command": "maclauncher-missing-open" } }"#,
    )
    .unwrap();
    let config = ConfigFile::open(config_path).unwrap().into_config();

    let launcher = ApplicationLauncher::new(
        Arc::new(FsDirectoryReader),
        Arc::new(SystemProcessRunner),
        config.launcher,
    );
    let registry = ToolRegistry::new(launcher);

    let result = registry
        .call("launch_app", Some(json!({ "appName": "Safari" })))
        .await
        .unwrap();
    assert_eq!(
        result,
        json!({ "success": false, "message": "Failed to launch application" })
    );
}
