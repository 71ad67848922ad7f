//! 설정 파일 로드.
//!
//! 시작 시 한 번 읽는다. 파일이 없으면 기본값으로 만들어 두고,
//! 일부 키만 있는 파일은 나머지를 기본값으로 채운다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 디스크에서 읽은 설정과 그 경로
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: AppConfig,
}

impl ConfigFile {
    /// 플랫폼 설정 디렉토리의 `config.json`
    ///
    /// - macOS: `~/Library/Application Support/dev.mac-launcher.mac-launcher/`
    /// - Linux: `~/.config/mac-launcher/`
    pub fn default_path() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("dev", "mac-launcher", "mac-launcher")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }

    /// 기본 경로에서 열기
    pub fn open_default() -> Result<Self, CoreError> {
        Self::open(Self::default_path()?)
    }

    /// 지정 경로에서 열기. 없으면 기본 설정을 기록한다.
    pub fn open(path: PathBuf) -> Result<Self, CoreError> {
        let config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                CoreError::Config(format!("설정 파일 읽기 실패: {}: {e}", path.display()))
            })?;
            let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
                CoreError::Config(format!("설정 파일 파싱 실패: {}: {e}", path.display()))
            })?;
            debug!("설정 파일 로드: {}", path.display());
            config
        } else {
            let config = AppConfig::default_config();
            write_default(&path, &config)?;
            info!("기본 설정 파일 생성: {}", path.display());
            config
        };

        Ok(Self { path, config })
    }

    /// 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 로드된 설정
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

fn write_default(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CoreError::Config(format!("설정 디렉토리 생성 실패: {}: {e}", parent.display()))
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)
        .map_err(|e| CoreError::Config(format!("설정 파일 저장 실패: {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let file = ConfigFile::open(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.config().launcher.bundle_suffix, ".app");

        let written: AppConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.launcher.open_command, "open");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "launcher": { "open_command": "xdg-open" } }"#).unwrap();

        let config = ConfigFile::open(path).unwrap().into_config();
        assert_eq!(config.launcher.open_command, "xdg-open");
        assert_eq!(config.launcher.applications_dir, PathBuf::from("/Applications"));
        assert_eq!(config.server.name, "mac-launcher");
    }

    #[test]
    fn existing_file_is_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        ConfigFile::open(path.clone()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigFile::open(path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
