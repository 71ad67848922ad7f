//! # maclauncher-platform
//!
//! 코어 포트의 OS 어댑터.
//!
//! - [`directory::FsDirectoryReader`]: tokio fs 기반 디렉토리 조회
//! - [`process::SystemProcessRunner`]: tokio process 기반 자식 프로세스 실행

pub mod directory;
pub mod process;

pub use directory::FsDirectoryReader;
pub use process::SystemProcessRunner;
