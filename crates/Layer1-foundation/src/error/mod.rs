//! Error types for FolioCode
//!
//! 모든 에러를 중앙에서 관리
//!
//! 주의: 레이아웃/prop 검증 실패는 에러가 아니라 `ValidationResult` 데이터로
//! 반환됩니다. 이 타입은 프로그래머 오류 계열(잘못된 내부 상태, 렌더링 실패,
//! 직렬화 실패 등)에만 사용합니다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// FolioCode 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 테마 관련
    // ========================================================================
    #[error("Theme error: {0}")]
    Theme(String),

    // ========================================================================
    // 레지스트리 관련
    // ========================================================================
    #[error("Registry error: {0}")]
    Registry(String),

    // ========================================================================
    // 플러그인 관련
    // ========================================================================
    #[error("Plugin error: {0}")]
    Plugin(String),

    // ========================================================================
    // 렌더링 관련
    // ========================================================================
    #[error("Render failed: {component} - {message}")]
    Render { component: String, message: String },

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::InvalidInput(_)
                | Error::Validation(_)
                | Error::Theme(_)
        )
    }

    /// 렌더링 에러 생성 헬퍼
    pub fn render(component: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Render {
            component: component.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
