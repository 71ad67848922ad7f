//! 도구 레지스트리.
//!
//! 도구 정의(`tools/list`)와 호출 디스패치(`tools/call`)를 담당한다.
//! 호출 흐름: 인자 존재 확인 → 이름 매칭 → 입력 검증 → 실행 → 출력 검증.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use maclauncher_core::models::launcher::{
    LaunchAppInput, LaunchResult, ListApplicationsInput, ListApplicationsOutput,
    OpenWithAppInput, ToolInput,
};

use crate::launcher::ApplicationLauncher;

/// 설치된 앱 목록 도구
pub const LIST_APPLICATIONS: &str = "list_applications";
/// 앱 실행 도구
pub const LAUNCH_APP: &str = "launch_app";
/// 앱으로 파일 열기 도구
pub const OPEN_WITH_APP: &str = "open_with_app";

/// 도구 호출 에러: 메시지는 클라이언트에 그대로 전달된다
#[derive(Debug, Error)]
pub enum ToolError {
    /// `arguments` 누락
    #[error("Arguments are required")]
    ArgumentsRequired,

    /// 입력 스키마 불일치 (부작용 실행 전)
    #[error("Invalid arguments")]
    InvalidArguments {
        /// 불일치 사유 (로그용)
        reason: String,
    },

    /// 등록되지 않은 도구 이름
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// 출력 스키마 불일치
    #[error("Invalid tool output: {0}")]
    InvalidOutput(String),
}

/// `tools/list`에 노출되는 도구 정의
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// 도구 이름
    pub name: String,
    /// 설명
    pub description: String,
    /// 입력 JSON Schema
    pub input_schema: Value,
}

/// 도구 레지스트리: 세 도구의 정의와 디스패치
pub struct ToolRegistry {
    launcher: ApplicationLauncher,
}

impl ToolRegistry {
    /// 새 레지스트리 생성
    pub fn new(launcher: ApplicationLauncher) -> Self {
        Self { launcher }
    }

    /// 도구 정의 목록
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        vec![
            definition::<ListApplicationsInput>(
                LIST_APPLICATIONS,
                "List all applications installed in the /Applications folder",
            ),
            definition::<LaunchAppInput>(LAUNCH_APP, "Launch a Mac application by name"),
            definition::<OpenWithAppInput>(
                OPEN_WITH_APP,
                "Open a file or folder with a specific application",
            ),
        ]
    }

    /// 도구 호출
    ///
    /// `arguments`가 없으면 도구 이름과 무관하게 `ArgumentsRequired`.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> Result<Value, ToolError> {
        let arguments = match arguments {
            Some(Value::Null) | None => return Err(ToolError::ArgumentsRequired),
            Some(arguments) => arguments,
        };

        debug!(tool = name, "도구 호출");

        match name {
            LIST_APPLICATIONS => {
                let _input: ListApplicationsInput = parse_input(arguments)?;
                let applications = self.launcher.list_applications().await;
                validate_output(&ListApplicationsOutput { applications })
            }
            LAUNCH_APP => {
                let input: LaunchAppInput = parse_input(arguments)?;
                let success = self.launcher.launch_app(&input.app_name).await;
                validate_output(&LaunchResult::launched(success))
            }
            OPEN_WITH_APP => {
                let input: OpenWithAppInput = parse_input(arguments)?;
                let success = self
                    .launcher
                    .open_with_app(&input.app_name, &input.file_path)
                    .await;
                validate_output(&LaunchResult::opened(success))
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn definition<T: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: json!(schemars::schema_for!(T)),
    }
}

/// 입력을 고정 형태로 파싱하고 추가 제약을 검사한다
///
/// 입력 스키마는 객체다. serde는 구조체를 배열로도 받으므로 먼저 거른다.
fn parse_input<T: ToolInput>(arguments: Value) -> Result<T, ToolError> {
    if !arguments.is_object() {
        debug!("객체가 아닌 입력: {arguments}");
        return Err(ToolError::InvalidArguments {
            reason: "arguments must be an object".to_string(),
        });
    }

    let input: T = serde_json::from_value(arguments).map_err(|e| {
        debug!("입력 스키마 불일치: {e}");
        ToolError::InvalidArguments {
            reason: e.to_string(),
        }
    })?;

    input.check().map_err(|reason| {
        debug!("입력 제약 위반: {reason}");
        ToolError::InvalidArguments { reason }
    })?;

    Ok(input)
}

/// 출력을 직렬화한 뒤 같은 형태로 다시 파싱하여 검증한다
fn validate_output<T: Serialize + DeserializeOwned>(output: &T) -> Result<Value, ToolError> {
    let value =
        serde_json::to_value(output).map_err(|e| ToolError::InvalidOutput(e.to_string()))?;
    <T as serde::Deserialize>::deserialize(&value)
        .map_err(|e| ToolError::InvalidOutput(e.to_string()))?;
    Ok(value)
}
