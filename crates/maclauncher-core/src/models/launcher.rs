//! 도구 호출 입력/출력 모델.
//!
//! 와이어 필드명은 camelCase (`appName`, `filePath`).
//! 입력 구조체는 `JsonSchema`를 derive하여 `tools/list`의 `inputSchema`로 노출된다.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// 앱 실행 성공 메시지
pub const LAUNCH_SUCCESS_MESSAGE: &str = "Application launched successfully";
/// 앱 실행 실패 메시지
pub const LAUNCH_FAILURE_MESSAGE: &str = "Failed to launch application";
/// 파일 열기 성공 메시지
pub const OPEN_SUCCESS_MESSAGE: &str = "File opened successfully";
/// 파일 열기 실패 메시지
pub const OPEN_FAILURE_MESSAGE: &str = "Failed to open file with application";

/// 도구 입력: 역직렬화 후 추가 제약 검사
pub trait ToolInput: DeserializeOwned + JsonSchema {
    /// serde가 표현하지 못하는 제약 검사. 위반 시 사유 반환.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// `list_applications` 입력 (필드 없음)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListApplicationsInput {}

impl ToolInput for ListApplicationsInput {}

/// `list_applications` 출력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListApplicationsOutput {
    /// 정렬된 앱 번들 이름
    pub applications: Vec<String>,
}

/// `launch_app` 입력
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAppInput {
    /// 실행할 앱 이름 (`.app` 생략 가능)
    #[schemars(length(min = 1))]
    pub app_name: String,
}

impl ToolInput for LaunchAppInput {
    fn check(&self) -> Result<(), String> {
        require_non_empty("appName", &self.app_name)
    }
}

/// `open_with_app` 입력
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenWithAppInput {
    /// 파일을 열 앱 이름 (`.app` 생략 가능)
    #[schemars(length(min = 1))]
    pub app_name: String,
    /// 열 파일 또는 폴더 경로
    pub file_path: String,
}

impl ToolInput for OpenWithAppInput {
    fn check(&self) -> Result<(), String> {
        require_non_empty("appName", &self.app_name)
    }
}

/// `launch_app` / `open_with_app` 출력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LaunchResult {
    /// 자식 프로세스가 정상 종료했는지
    pub success: bool,
    /// 사람이 읽는 결과 메시지
    pub message: String,
}

impl LaunchResult {
    /// 앱 실행 결과
    pub fn launched(success: bool) -> Self {
        let message = if success {
            LAUNCH_SUCCESS_MESSAGE
        } else {
            LAUNCH_FAILURE_MESSAGE
        };
        Self {
            success,
            message: message.to_string(),
        }
    }

    /// 파일 열기 결과
    pub fn opened(success: bool) -> Self {
        let message = if success {
            OPEN_SUCCESS_MESSAGE
        } else {
            OPEN_FAILURE_MESSAGE
        };
        Self {
            success,
            message: message.to_string(),
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{field} 비어 있음"))
    } else {
        Ok(())
    }
}
