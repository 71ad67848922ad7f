//! MCP stdio 서버.
//!
//! 한 줄 = 한 JSON-RPC 메시지. 요청마다 응답 한 줄을 쓰고 flush한다.
//! 알림에는 응답하지 않는다. 입력 EOF에서 정상 종료.

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use maclauncher_core::config::ServerConfig;
use maclauncher_core::error::CoreError;
use maclauncher_tools::ToolRegistry;

use crate::jsonrpc::{
    RpcError, RpcRequest, RpcResponse, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION,
    PARSE_ERROR,
};

/// `tools/call` 파라미터
#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// MCP 서버: 레지스트리와 서버 식별 정보를 소유하는 단일 컴포지션 루트 값
pub struct McpServer {
    registry: ToolRegistry,
    info: ServerConfig,
}

impl McpServer {
    /// 새 서버 생성
    pub fn new(registry: ToolRegistry, info: ServerConfig) -> Self {
        Self { registry, info }
    }

    /// 프로세스 stdin/stdout으로 서비스
    pub async fn serve_stdio(&self) -> Result<(), CoreError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// 임의의 줄 단위 스트림으로 서비스 (EOF까지)
    ///
    /// 읽기/쓰기 I/O 실패는 복구하지 않고 반환한다.
    /// UTF-8이 아닌 줄은 파싱 오류 응답 후 계속 읽는다.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), CoreError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    warn!("UTF-8이 아닌 입력: {e}");
                    Some(parse_error())
                }
            };

            if let Some(response) = response {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                writer.write_all(payload.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("입력 스트림 종료, 서버 루프 종료");
        Ok(())
    }

    /// 메시지 한 줄 처리. 응답이 필요 없으면 `None`.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("JSON 파싱 실패: {e}");
                return Some(parse_error());
            }
        };

        // 클라이언트가 보낸 응답 (method 없음): 서버는 요청을 보내지 않으므로 무시
        if message.get("method").is_none()
            && (message.get("result").is_some() || message.get("error").is_some())
        {
            debug!("클라이언트 응답 메시지 무시");
            return None;
        }

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        let request: RpcRequest = match serde_json::from_value(message) {
            Ok(request) => request,
            Err(e) => {
                warn!("잘못된 JSON-RPC 요청: {e}");
                return Some(RpcResponse::failure(
                    id,
                    RpcError::new(INVALID_REQUEST, "Invalid Request"),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(RpcResponse::failure(
                id,
                RpcError::new(INVALID_REQUEST, "Invalid Request"),
            ));
        }

        self.handle_request(request).await
    }

    async fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        let RpcRequest {
            id, method, params, ..
        } = request;

        let Some(id) = id else {
            debug!(method = %method, "알림 수신");
            return None;
        };

        debug!(method = %method, id = %id, "요청 수신");

        let response = match self.dispatch(&method, params).await {
            Ok(result) => RpcResponse::success(id, result),
            Err(error) => {
                warn!(method = %method, code = error.code, "요청 실패: {}", error.message);
                RpcResponse::failure(id, error)
            }
        };
        Some(response)
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(self.initialize(params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.list_tools() })),
            "tools/call" => self.call_tool(params).await,
            other => Err(RpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(self.info.protocol_version.as_str());

        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version,
            },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| RpcError::new(INVALID_PARAMS, "Missing params"))
            .and_then(|p| {
                serde_json::from_value(p)
                    .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))
            })?;

        let output = self.registry.call(&params.name, params.arguments).await?;

        Ok(json!({
            "toolResult": output,
            "content": [{ "type": "text", "text": output.to_string() }],
        }))
    }
}

fn parse_error() -> RpcResponse {
    RpcResponse::failure(Value::Null, RpcError::new(PARSE_ERROR, "Parse error"))
}
