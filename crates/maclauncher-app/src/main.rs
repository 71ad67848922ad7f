//! # maclauncher-app
//!
//! mac-launcher MCP 서버 바이너리 진입점.
//! 설정 로드, 어댑터 DI 와이어링, stdio 서버 실행, 시그널 종료.

use anyhow::{Context, Result};
use clap::Parser;
use maclauncher_core::config::AppConfig;
use maclauncher_core::config_file::ConfigFile;
use maclauncher_mcp::McpServer;
use maclauncher_platform::{FsDirectoryReader, SystemProcessRunner};
use maclauncher_tools::{ApplicationLauncher, ToolRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// macOS 앱 실행 MCP 서버
///
/// stdin/stdout으로 JSON-RPC 메시지를 주고받는다. 로그는 stderr로 출력.
#[derive(Parser, Debug)]
#[command(name = "mac-launcher")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 설정 파일 없이 기본값과 CLI 인자만 사용
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// 앱 번들 탐색 디렉토리 (기본: /Applications)
    #[arg(long)]
    applications_dir: Option<PathBuf>,

    /// 문서/앱 열기 명령 (기본: open)
    #[arg(long)]
    open_command: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// tracing 초기화: stdout은 프로토콜 전용이므로 stderr로 출력
fn init_tracing(log_level: &str) {
    let log_filter = format!(
        "maclauncher_app={log_level},maclauncher_core={log_level},maclauncher_platform={log_level},maclauncher_tools={log_level},maclauncher_mcp={log_level}"
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// 설정 로드 후 CLI 인자로 오버라이드
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if args.no_config {
        AppConfig::default_config()
    } else {
        let file = match &args.config {
            Some(path) => ConfigFile::open(path.clone()),
            None => ConfigFile::open_default(),
        }
        .context("설정 로드 실패")?;
        info!("설정 파일: {}", file.path().display());
        file.into_config()
    };

    if let Some(dir) = &args.applications_dir {
        config.launcher.applications_dir = dir.clone();
    }
    if let Some(command) = &args.open_command {
        config.launcher.open_command = command.clone();
    }

    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    info!(
        applications_dir = %config.launcher.applications_dir.display(),
        open_command = %config.launcher.open_command,
        "mac-launcher 시작"
    );

    // ── 어댑터 생성 (DI 와이어링) ──
    let launcher = ApplicationLauncher::new(
        Arc::new(FsDirectoryReader),
        Arc::new(SystemProcessRunner),
        config.launcher.clone(),
    );
    let server = McpServer::new(ToolRegistry::new(launcher), config.server.clone());

    eprintln!("Mac Launcher MCP Server running on stdio");

    tokio::select! {
        result = server.serve_stdio() => {
            result.context("stdio 전송 실패")?;
        }
        signal = shutdown_signal() => {
            info!("{signal} 수신, 서버 중단");
        }
    }

    Ok(())
}

/// 종료 시그널 대기 (SIGINT, SIGTERM). 등록에 실패하면 영원히 대기한다.
async fn shutdown_signal() -> &'static str {
    match wait_for_signal().await {
        Ok(name) => name,
        Err(e) => {
            warn!("시그널 핸들러 등록 실패: {e}");
            std::future::pending().await
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            error!("치명적 오류: {e:#}");
            eprintln!("Fatal error in main(): {e:#}");
            1
        }
    };

    // stdin 읽기용 blocking 스레드를 기다리지 않고 즉시 종료
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_applied_without_config_file() {
        let args = Args::parse_from([
            "mac-launcher",
            "--no-config",
            "--applications-dir",
            "/tmp/apps",
            "--open-command",
            "xdg-open",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.launcher.applications_dir, PathBuf::from("/tmp/apps"));
        assert_eq!(config.launcher.open_command, "xdg-open");
        assert_eq!(config.launcher.bundle_suffix, ".app");
    }

    #[test]
    fn explicit_config_file_is_created() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let args = Args::parse_from(["mac-launcher", "--config", path.to_str().unwrap()]);

        let config = load_config(&args).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.name, "mac-launcher");
    }

    #[test]
    fn config_and_no_config_conflict() {
        let result = Args::try_parse_from(["mac-launcher", "--no-config", "--config", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn partial_config_file_merges_with_cli() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "launcher": { "open_command": "xdg-open" } }"#).unwrap();

        let args = Args::parse_from([
            "mac-launcher",
            "-c",
            path.to_str().unwrap(),
            "--applications-dir",
            "/srv/apps",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.launcher.open_command, "xdg-open");
        assert_eq!(config.launcher.applications_dir, PathBuf::from("/srv/apps"));
    }

    #[tokio::test]
    async fn shutdown_signal_waits_without_signal() {
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(50), shutdown_signal()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn default_log_level_is_info() {
        let args = Args::parse_from(["mac-launcher"]);
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
    }
}
