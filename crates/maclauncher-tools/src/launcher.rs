//! 앱 실행기.
//!
//! 도구별 실패 정책이 다르다:
//! - 목록 조회 실패 → 빈 목록
//! - 실행/열기 실패 → `false`
//!
//! 어느 쪽도 호출자에게 에러를 전파하지 않는다.

use std::ffi::OsString;
use std::sync::Arc;
use tracing::{error, info};

use maclauncher_core::config::LauncherConfig;
use maclauncher_core::models::application::ApplicationName;
use maclauncher_core::ports::directory::DirectoryReader;
use maclauncher_core::ports::process::ProcessRunner;

/// 앱 실행기: 디렉토리 조회 + `open` 호출
pub struct ApplicationLauncher {
    directory: Arc<dyn DirectoryReader>,
    runner: Arc<dyn ProcessRunner>,
    config: LauncherConfig,
}

impl ApplicationLauncher {
    /// 새 앱 실행기 생성
    pub fn new(
        directory: Arc<dyn DirectoryReader>,
        runner: Arc<dyn ProcessRunner>,
        config: LauncherConfig,
    ) -> Self {
        Self {
            directory,
            runner,
            config,
        }
    }

    /// 앱 디렉토리의 번들 이름을 사전순으로 반환
    ///
    /// 디렉토리 조회 실패 시 에러를 기록하고 빈 목록을 반환한다.
    pub async fn list_applications(&self) -> Vec<String> {
        let dir = &self.config.applications_dir;
        let names = match self.directory.read_entry_names(dir).await {
            Ok(names) => names,
            Err(e) => {
                error!(dir = %dir.display(), "앱 목록 조회 실패: {e}");
                return Vec::new();
            }
        };

        let mut applications: Vec<String> = names
            .into_iter()
            .filter(|name| name.ends_with(&self.config.bundle_suffix))
            .collect();
        applications.sort();
        applications
    }

    /// 이름으로 앱 실행 (`open <appPath>`)
    pub async fn launch_app(&self, app_name: &str) -> bool {
        let app_path = self.bundle_path(app_name);
        info!(app = %app_path.display(), "앱 실행");

        self.run_open(vec![app_path.into_os_string()], "앱 실행 실패")
            .await
    }

    /// 지정 앱으로 파일 열기 (`open -a <appPath> <filePath>`)
    pub async fn open_with_app(&self, app_name: &str, file_path: &str) -> bool {
        let app_path = self.bundle_path(app_name);
        info!(app = %app_path.display(), file = file_path, "앱으로 파일 열기");

        let args = vec![
            OsString::from("-a"),
            app_path.into_os_string(),
            OsString::from(file_path),
        ];
        self.run_open(args, "앱으로 파일 열기 실패").await
    }

    fn bundle_path(&self, app_name: &str) -> std::path::PathBuf {
        ApplicationName::normalize(app_name, &self.config.bundle_suffix)
            .bundle_path(&self.config.applications_dir)
    }

    /// open 명령 실행. 실행 불가 또는 비정상 종료는 `false`.
    async fn run_open(&self, args: Vec<OsString>, failure_context: &str) -> bool {
        match self.runner.run(&self.config.open_command, &args).await {
            Ok(output) if output.success() => true,
            Ok(output) => {
                error!(
                    exit_code = ?output.exit_code,
                    stderr = %output.stderr,
                    "{failure_context}"
                );
                false
            }
            Err(e) => {
                error!("{failure_context}: {e}");
                false
            }
        }
    }
}
