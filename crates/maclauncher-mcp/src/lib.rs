//! # maclauncher-mcp
//!
//! Model Context Protocol 서버.
//! stdin/stdout 위의 줄 단위 JSON-RPC 2.0 메시지를 받아
//! `ToolRegistry`로 디스패치한다. 요청은 도착 순서대로 하나씩 처리한다.

pub mod jsonrpc;
pub mod server;

pub use server::McpServer;
