//! folio-core: Core Runtime for FolioCode
//!
//! Layer2 - 포트폴리오 합성 메커니즘 레이어
//!
//! # 주요 모듈
//!
//! - `theme`: 테마 엔진 (팔레트 해석 + 변경 통지)
//! - `component`: Builtin 컴포넌트 렌더러 7종
//! - `registry`: Core/Extensible 레지스트리
//! - `plugin`: Plugin 확장 시스템
//! - `config`: 전역/컴포넌트 설정 시스템
//! - `layout`: 레이아웃 합성 파이프라인
//!
//! # 사용 예시
//!
//! ```ignore
//! use folio_core::{
//!     ConfigManager, CoreRegistry, ExtensibleRegistry, PortfolioComposer, ThemeEngine,
//! };
//!
//! let config = Arc::new(ConfigManager::new());
//! let registry = Arc::new(ExtensibleRegistry::new(
//!     Arc::new(CoreRegistry::with_builtins()),
//!     config.clone(),
//! ));
//! let composer = PortfolioComposer::new(registry, config, Arc::new(ThemeEngine::new()));
//!
//! let page = composer.compose(request).await;
//! for section in &page.sections {
//!     println!("{}", section.html);
//! }
//! ```

// Core modules
pub mod component;
pub mod config;
pub mod layout;
pub mod plugin;
pub mod registry;
pub mod theme;

// Re-exports: Theme
pub use theme::{definition, definition_for, ThemeEngine, ThemeListener};

// Re-exports: Component
pub use component::{
    builtin::{all_components, registrations, BuiltinRegistration},
    html_escape,
};

// Re-exports: Registry
pub use registry::{CoreRegistry, ExtensibleRegistry};

// Re-exports: Plugin
pub use plugin::{PluginConfig, PluginHooks, PluginSystem, PortfolioPlugin, RegistrationOutcome};

// Re-exports: Config
pub use config::{
    ComponentSettings, ComponentSettingsPatch, ComponentTelemetry, ConfigManager, GlobalSettings,
};

// Re-exports: Layout
pub use layout::{placeholder_section, ComposedPage, PortfolioComposer};

// 하위 레이어 편의 재노출
pub use folio_foundation::{
    ComponentCategory, ComponentConfig, ComponentMetadata, ComponentRenderer, Error,
    LayoutRequest, LookupSource, RegistryLookupResult, RenderedSection, Result, ThemeDefinition,
    ThemeId, ValidationResult,
};
