//! # maclauncher-tools
//!
//! 앱 실행 도구 크레이트.
//! 세 가지 도구(`list_applications`, `launch_app`, `open_with_app`)를
//! OS 호출 한 번씩으로 변환하고, 입력/출력을 고정 스키마로 검증한다.

pub mod launcher;
pub mod registry;

pub use launcher::ApplicationLauncher;
pub use registry::{ToolDefinition, ToolError, ToolRegistry};
