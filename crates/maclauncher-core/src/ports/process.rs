//! 자식 프로세스 실행 포트.
//!
//! OS의 문서 열기 명령(`open`)을 호출하는 경계를 정의한다.
//! 셸을 거치지 않고 인자를 그대로 argv로 전달해야 한다.

use async_trait::async_trait;
use std::ffi::OsString;

use crate::error::CoreError;

/// 프로세스 실행 결과
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// 종료 코드 (시그널 종료 시 None)
    pub exit_code: Option<i32>,
    /// 표준 출력
    pub stdout: String,
    /// 표준 에러
    pub stderr: String,
}

impl ProcessOutput {
    /// 종료 코드 0 여부
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 자식 프로세스 실행기
///
/// 구현체: `SystemProcessRunner` (tokio::process)
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// 프로세스를 실행하고 종료까지 대기한다.
    ///
    /// 실행 자체가 불가능하면 `Err`, 실행 후 비정상 종료는 `Ok`에 종료 코드로 보고한다.
    async fn run(&self, program: &str, args: &[OsString]) -> Result<ProcessOutput, CoreError>;
}
