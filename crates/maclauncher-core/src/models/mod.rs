//! mac-launcher 도메인 모델.
//!
//! 도구 호출 입력/출력 구조체와 앱 이름 정규화를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod application;
pub mod launcher;
