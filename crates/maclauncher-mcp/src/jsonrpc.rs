//! JSON-RPC 2.0 와이어 타입.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use maclauncher_tools::ToolError;

/// 프로토콜 버전 문자열
pub const JSONRPC_VERSION: &str = "2.0";

/// 파싱 불가 JSON
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC 요청 형식 아님
pub const INVALID_REQUEST: i32 = -32600;
/// 미지원 메서드
pub const METHOD_NOT_FOUND: i32 = -32601;
/// 잘못된 파라미터
pub const INVALID_PARAMS: i32 = -32602;
/// 서버 내부 오류
pub const INTERNAL_ERROR: i32 = -32603;

/// 수신 메시지 (요청 또는 알림)
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// 반드시 "2.0"
    pub jsonrpc: String,
    /// 요청 ID. 키가 없으면 알림 (응답하지 않음), `null`은 `Some(Value::Null)`
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
    /// 메서드 이름
    pub method: String,
    /// 파라미터
    #[serde(default)]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// 응답이 필요 없는 알림인지
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// 키가 존재하면 값이 `null`이어도 `Some`
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 에러 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// 에러 코드
    pub code: i32,
    /// 에러 메시지
    pub message: String,
}

impl RpcError {
    /// 새 에러 객체
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 미지원 메서드 에러
    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }
}

impl From<ToolError> for RpcError {
    fn from(err: ToolError) -> Self {
        let code = match &err {
            ToolError::ArgumentsRequired
            | ToolError::InvalidArguments { .. }
            | ToolError::UnknownTool(_) => INVALID_PARAMS,
            ToolError::InvalidOutput(_) => INTERNAL_ERROR,
        };
        Self::new(code, err.to_string())
    }
}

/// 송신 응답: `result`와 `error` 중 하나만 존재
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// 항상 "2.0"
    pub jsonrpc: String,
    /// 요청 ID (파싱 실패 시 null)
    pub id: Value,
    /// 성공 결과
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// 실패 정보
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// 성공 응답
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// 실패 응답
    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_id_is_notification() {
        let req: RpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(req.is_notification());
        assert!(req.params.is_none());
    }

    #[test]
    fn null_id_is_still_a_request() {
        let req: RpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": null,
            "method": "ping"
        }))
        .unwrap();
        assert!(!req.is_notification());
        assert_eq!(req.id, Some(Value::Null));
    }

    #[test]
    fn failure_omits_result() {
        let resp = RpcResponse::failure(json!(3), RpcError::method_not_found("foo/bar"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["error"]["code"], METHOD_NOT_FOUND);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn tool_errors_map_to_codes() {
        let invalid: RpcError = ToolError::InvalidArguments {
            reason: "missing field".to_string(),
        }
        .into();
        assert_eq!(invalid, RpcError::new(INVALID_PARAMS, "Invalid arguments"));

        let unknown: RpcError = ToolError::UnknownTool("x".to_string()).into();
        assert_eq!(unknown.message, "Unknown tool: x");

        let output: RpcError = ToolError::InvalidOutput("bad".to_string()).into();
        assert_eq!(output.code, INTERNAL_ERROR);
    }
}
