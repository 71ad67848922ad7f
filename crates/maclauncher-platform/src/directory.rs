//! 파일시스템 디렉토리 조회.

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use maclauncher_core::error::CoreError;
use maclauncher_core::ports::directory::DirectoryReader;

/// tokio fs 기반 디렉토리 조회기
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryReader;

#[async_trait]
impl DirectoryReader for FsDirectoryReader {
    async fn read_entry_names(&self, dir: &Path) -> Result<Vec<String>, CoreError> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "UTF-8이 아닌 항목 건너뜀"),
            }
        }

        debug!(dir = %dir.display(), count = names.len(), "디렉토리 조회 완료");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("Safari.app")).unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let mut names = FsDirectoryReader
            .read_entry_names(temp_dir.path())
            .await
            .unwrap();
        names.sort();
        assert_eq!(names, vec!["Safari.app".to_string(), "notes.txt".to_string()]);
    }

    #[tokio::test]
    async fn missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FsDirectoryReader
            .read_entry_names(&temp_dir.path().join("missing"))
            .await;
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
