//! Event Types - 설정 변경 이벤트 정의

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Event ID
// ============================================================================

/// 이벤트 고유 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    /// 새 이벤트 ID 생성
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Change Kind
// ============================================================================

/// 설정 변경 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigChangeKind {
    /// 전역 설정 변경 (기본값, 한도, 플래그)
    Global,
    /// 특정 컴포넌트 설정 변경
    Component,
    /// 활성/비활성 상태 변경
    Availability,
}

impl ConfigChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Component => "component",
            Self::Availability => "availability",
        }
    }
}

// ============================================================================
// Change Event
// ============================================================================

/// 설정 변경 이벤트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigChangeEvent {
    /// 고유 ID
    pub id: EventId,

    /// 변경 종류
    pub kind: ConfigChangeKind,

    /// 영향을 받은 컴포넌트 식별자 (전역 변경이면 None)
    pub key: Option<String>,

    /// 변경 설명
    pub description: String,

    /// 발생 시각
    pub timestamp: DateTime<Utc>,
}

impl ConfigChangeEvent {
    /// 새 이벤트 생성
    pub fn new(kind: ConfigChangeKind, key: Option<String>, description: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            kind,
            key,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    /// 전역 변경 이벤트
    pub fn global(description: impl Into<String>) -> Self {
        Self::new(ConfigChangeKind::Global, None, description)
    }

    /// 컴포넌트 변경 이벤트
    pub fn component(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ConfigChangeKind::Component, Some(key.into()), description)
    }

    /// 활성 상태 변경 이벤트
    pub fn availability(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ConfigChangeKind::Availability, Some(key.into()), description)
    }
}
