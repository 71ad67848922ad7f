//! 앱 번들 이름.

use std::fmt;
use std::path::{Path, PathBuf};

/// 번들 접미사가 보장된 앱 이름 (예: `Safari.app`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// 접미사가 없으면 붙여서 정규화한다. 이미 있으면 그대로 둔다.
    pub fn normalize(raw: &str, bundle_suffix: &str) -> Self {
        if raw.ends_with(bundle_suffix) {
            Self(raw.to_string())
        } else {
            Self(format!("{raw}{bundle_suffix}"))
        }
    }

    /// 정규화된 번들 이름
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 앱 디렉토리 아래의 번들 경로
    ///
    /// 선행 `/`는 제거되어 결과가 항상 `applications_dir` 아래에 놓인다.
    pub fn bundle_path(&self, applications_dir: &Path) -> PathBuf {
        applications_dir.join(self.0.trim_start_matches('/'))
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
