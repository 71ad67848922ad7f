//! 디렉토리 조회 포트.

use async_trait::async_trait;
use std::path::Path;

use crate::error::CoreError;

/// 디렉토리 항목 이름 조회 인터페이스
///
/// 구현체: `FsDirectoryReader` (실제 파일시스템)
#[async_trait]
pub trait DirectoryReader: Send + Sync {
    /// `dir` 바로 아래 항목 이름 목록 (순서 보장 없음)
    async fn read_entry_names(&self, dir: &Path) -> Result<Vec<String>, CoreError>;
}
