//! 자식 프로세스 실행.
//!
//! `tokio::process::Command`로 프로그램을 직접 실행한다 (셸 해석 없음).
//! 종료까지 대기하며 타임아웃은 두지 않는다.

use async_trait::async_trait;
use std::ffi::OsString;
use tokio::process::Command;
use tracing::debug;

use maclauncher_core::error::CoreError;
use maclauncher_core::ports::process::{ProcessOutput, ProcessRunner};

/// 시스템 자식 프로세스 실행기
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> Result<ProcessOutput, CoreError> {
        debug!(program, args = ?args, "자식 프로세스 실행");

        let output = Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .map_err(|e| CoreError::ProcessSpawn {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };

        debug!(program, exit_code = ?result.exit_code, "자식 프로세스 종료");
        Ok(result)
    }
}
