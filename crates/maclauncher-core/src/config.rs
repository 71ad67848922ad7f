//! 애플리케이션 설정 구조체.
//!
//! 앱 디렉토리, 번들 접미사, open 명령, MCP 서버 식별 정보를 정의한다.
//! `ConfigFile`을 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 앱 실행 설정
    #[serde(default)]
    pub launcher: LauncherConfig,
    /// MCP 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            launcher: LauncherConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 앱 실행 설정
// ============================================================

/// 앱 실행 설정: 탐색 디렉토리와 OS open 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// 설치된 앱 번들을 탐색할 디렉토리
    #[serde(default = "default_applications_dir")]
    pub applications_dir: PathBuf,
    /// 앱 번들 파일명 접미사
    #[serde(default = "default_bundle_suffix")]
    pub bundle_suffix: String,
    /// 문서/앱 열기 명령 (`open <path>`, `open -a <app> <path>`)
    #[serde(default = "default_open_command")]
    pub open_command: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            applications_dir: default_applications_dir(),
            bundle_suffix: default_bundle_suffix(),
            open_command: default_open_command(),
        }
    }
}

fn default_applications_dir() -> PathBuf {
    PathBuf::from("/Applications")
}

fn default_bundle_suffix() -> String {
    ".app".to_string()
}

fn default_open_command() -> String {
    "open".to_string()
}

// ============================================================
// MCP 서버 설정
// ============================================================

/// MCP 서버 설정: `initialize` 응답에 실리는 식별 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 서버 이름
    #[serde(default = "default_server_name")]
    pub name: String,
    /// 서버 버전
    #[serde(default = "default_server_version")]
    pub version: String,
    /// 클라이언트가 버전을 보내지 않을 때 사용할 프로토콜 버전
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
            protocol_version: default_protocol_version(),
        }
    }
}

fn default_server_name() -> String {
    "mac-launcher".to_string()
}

fn default_server_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_protocol_version() -> String {
    "2024-11-05".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "launcher": { "applications_dir": "/tmp/apps" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.launcher.applications_dir, PathBuf::from("/tmp/apps"));
        assert_eq!(config.launcher.bundle_suffix, ".app");
        assert_eq!(config.server.protocol_version, "2024-11-05");
    }

    #[test]
    fn empty_json_is_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.launcher.open_command, "open");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
