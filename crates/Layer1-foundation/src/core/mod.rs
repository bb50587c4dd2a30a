//! Core Module - 핵심 인터페이스 및 타입
//!
//! FolioCode의 공유 어휘를 정의합니다.
//!
//! ## 타입 계층
//!
//! - `types.rs`: 데이터 타입 (카테고리, 테마, 레이아웃, 검증 결과 등)
//! - `traits.rs`: 인터페이스 (ComponentRenderer, PropValidator)
//!
//! ## 해석 구조
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Extensible Registry                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                   │
//! │  │  Core (고정 7)  │  │  Plugins (동적) │                   │
//! │  │  ├── hero_*     │  │  ├── custom_a   │                   │
//! │  │  ├── exp_*      │  │  └── custom_b   │                   │
//! │  │  ├── skills_*   │  │                 │                   │
//! │  │  └── stats_*    │  │                 │                   │
//! │  └────────┬────────┘  └────────┬────────┘                   │
//! │           └────────┬───────────┘                            │
//! │                    ▼                                        │
//! │           ComponentRenderer + PropValidator                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod traits;
pub mod types;

pub use traits::{ComponentRenderer, PropValidator};
pub use types::{
    CandidateProfile, ComponentCategory, ComponentConfig, ComponentMetadata, LayoutRequest,
    LookupSource, RegistryLookupResult, RenderedSection, ThemeDefinition, ThemeId,
    ValidationResult,
};
