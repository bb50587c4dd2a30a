//! # folio-foundation
//!
//! Foundation layer for FolioCode:
//! - Core: 공유 어휘 (카테고리, 테마, 레이아웃, ComponentRenderer trait)
//! - Error: 중앙 에러 타입
//! - Event: 설정 변경 이벤트 버스 (고정 용량 히스토리 + 리스너 격리)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layout (AI 생성)                                       │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  Extensible Registry ──► Core / Plugin 해석             │
//! │       │                                                 │
//! │       ▼                                                 │
//! │  ComponentRenderer ──► 테마 반영 HTML 섹션              │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod core;
pub mod error;
pub mod event;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (핵심 Trait 및 타입)
// ============================================================================
pub use core::{
    // Types - 프로필/레이아웃 (types.rs)
    CandidateProfile,
    ComponentCategory,
    ComponentConfig,
    ComponentMetadata,
    LayoutRequest,
    // Types - 해석 결과 (types.rs)
    LookupSource,
    RegistryLookupResult,
    RenderedSection,
    // Types - 테마 (types.rs)
    ThemeDefinition,
    ThemeId,
    // Types - 검증 (types.rs)
    ValidationResult,
    // Traits (traits.rs)
    ComponentRenderer,
    PropValidator,
};

// ============================================================================
// Event (설정 변경 이벤트)
// ============================================================================
pub use event::{
    ChangeBus, ChangeBusConfig, ChangeListener, ConfigChangeEvent, ConfigChangeKind, ListenerId,
};
