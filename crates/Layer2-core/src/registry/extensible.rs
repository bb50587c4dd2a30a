//! Extensible Registry - core + 플러그인 + 설정의 단일 진입점
//!
//! 해석 규칙은 세 줄로 끝납니다:
//! 1. core 식별자는 무조건 core로 해석 (플러그인이 가릴 수 없음)
//! 2. 그 외에는 플러그인 맵 조회 (활성 여부는 설정과 플러그인 설정의 AND)
//! 3. 둘 다 아니면 `not_found`
//!
//! 비활성화는 해석을 막지 않습니다. `is_enabled`는 보고일 뿐이며
//! 건너뛸지 여부는 파이프라인이 결정합니다.

use crate::config::ConfigManager;
use crate::plugin::{PluginSystem, PortfolioPlugin, RegistrationOutcome};
use crate::registry::{layout_warnings, CoreRegistry};
use folio_foundation::{
    ComponentCategory, ComponentConfig, ComponentMetadata, LookupSource, RegistryLookupResult,
    ValidationResult,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// core와 플러그인을 합치는 확장 레지스트리
///
/// ## 사용법
/// ```ignore
/// let registry = ExtensibleRegistry::new(core, config);
/// let lookup = registry.lookup("hero_prism").await;
/// assert_eq!(lookup.source, LookupSource::Core);
/// ```
pub struct ExtensibleRegistry {
    core: Arc<CoreRegistry>,
    config: Arc<ConfigManager>,
    plugins: PluginSystem,
}

impl ExtensibleRegistry {
    /// 확장 레지스트리 생성
    pub fn new(core: Arc<CoreRegistry>, config: Arc<ConfigManager>) -> Self {
        Self {
            core,
            config,
            plugins: PluginSystem::new(),
        }
    }

    /// core 레지스트리 핸들
    pub fn core(&self) -> &Arc<CoreRegistry> {
        &self.core
    }

    /// 플러그인 시스템 핸들
    pub fn plugins(&self) -> &PluginSystem {
        &self.plugins
    }

    // ========================================================================
    // 해석
    // ========================================================================

    /// 식별자 해석
    ///
    /// 어떤 입력에도 에러 없이 응답합니다. core 식별자의 `is_enabled`는
    /// 비활성화 집합의 보고값이며, 해석 자체는 막히지 않습니다.
    pub async fn lookup(&self, id: &str) -> RegistryLookupResult {
        if let Some(renderer) = self.core.get(id) {
            let is_enabled = !self.config.is_disabled(id).await;
            return RegistryLookupResult {
                renderer: Some(renderer),
                metadata: self.core.metadata(id),
                is_plugin: false,
                is_enabled,
                source: LookupSource::Core,
            };
        }

        if let Some(plugin) = self.plugins.get(id).await {
            let is_enabled =
                !self.config.is_disabled(id).await && self.plugins.is_enabled(id).await;
            return RegistryLookupResult {
                renderer: Some(plugin.renderer),
                metadata: Some(plugin.metadata),
                is_plugin: true,
                is_enabled,
                source: LookupSource::Plugin,
            };
        }

        debug!(component_id = %id, "Lookup missed both core and plugins");
        RegistryLookupResult::not_found()
    }

    /// 등록 여부 (core 또는 플러그인)
    pub async fn contains(&self, id: &str) -> bool {
        self.core.contains(id) || self.plugins.contains(id).await
    }

    /// 카테고리별 식별자 - core 전체 + 활성 플러그인
    pub async fn by_category(&self, category: ComponentCategory) -> Vec<String> {
        let mut ids = self.core.by_category(category);
        ids.sort();

        for id in self.plugins.enabled_plugins().await {
            if self.plugins.metadata(&id).await.map(|m| m.category) == Some(category) {
                ids.push(id);
            }
        }
        ids
    }

    /// 카테고리 fallback - 항상 core로 해석됨
    pub async fn fallback_component(&self, category: ComponentCategory) -> RegistryLookupResult {
        self.lookup(CoreRegistry::fallback_for(category)).await
    }

    /// 식별자의 카테고리 (core 우선)
    pub async fn category_of(&self, id: &str) -> Option<ComponentCategory> {
        if let Some(category) = self.core.category_of(id) {
            return Some(category);
        }
        self.plugins.metadata(id).await.map(|m| m.category)
    }

    /// 메타데이터 조회 (core 우선)
    pub async fn metadata(&self, id: &str) -> Option<ComponentMetadata> {
        if let Some(metadata) = self.core.metadata(id) {
            return Some(metadata);
        }
        self.plugins.metadata(id).await
    }

    // ========================================================================
    // 플러그인 관리
    // ========================================================================

    /// 플러그인 등록 (위임)
    ///
    /// core와 같은 id의 플러그인도 저장은 되지만 조회에서 절대
    /// 선택되지 않습니다.
    pub async fn register_component(&self, plugin: PortfolioPlugin) -> RegistrationOutcome {
        self.plugins.register(plugin).await
    }

    /// 플러그인 해제 - core 식별자는 거부
    pub async fn unregister_component(&self, id: &str) -> bool {
        if self.core.contains(id) {
            debug!(component_id = %id, "Refusing to unregister core component");
            return false;
        }
        self.plugins.unregister(id).await
    }

    // ========================================================================
    // 검증
    // ========================================================================

    /// prop 검증 - core 또는 플러그인 검증기로 분기
    pub async fn validate_props(&self, id: &str, props: &Value) -> ValidationResult {
        if self.core.contains(id) {
            return self.core.validate_props(id, props);
        }
        self.plugins.validate_props(id, props).await
    }

    /// 레이아웃 전체 검증 - 플러그인 식별자까지 인지
    pub async fn validate_layout(&self, configs: &[ComponentConfig]) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (i, config) in configs.iter().enumerate() {
            let mut entry = self.validate_props(&config.component, &config.props).await;
            crate::component::validate::check_order(&mut entry, config.order);
            result.merge(entry.labeled(&format!("{} (#{})", config.component, i)));
        }

        let mut categories = std::collections::HashMap::new();
        for config in configs {
            if let Some(category) = self.category_of(&config.component).await {
                categories.insert(config.component.clone(), category);
            }
        }
        layout_warnings(&mut result, configs, |id| categories.get(id).copied());
        result
    }

    /// core 식별자 집합 (설정 검증기에 전달용)
    pub fn core_ids(&self) -> HashSet<String> {
        self.core.ids().into_iter().collect()
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_foundation::{
        ComponentRenderer, RenderedSection, Result, ThemeDefinition,
    };
    use serde_json::json;

    struct StubRenderer {
        id: &'static str,
        category: ComponentCategory,
    }

    impl ComponentRenderer for StubRenderer {
        fn id(&self) -> &str {
            self.id
        }

        fn category(&self) -> ComponentCategory {
            self.category
        }

        fn render(&self, _props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
            Ok(RenderedSection {
                component: self.id.to_string(),
                category: Some(self.category),
                css_class: theme.css_class.to_string(),
                html: format!("<section data-plugin=\"{}\"></section>", self.id),
            })
        }
    }

    fn plugin(id: &'static str, category: ComponentCategory) -> PortfolioPlugin {
        PortfolioPlugin::new(
            ComponentMetadata::new(id, "Plugin Component", category),
            Arc::new(StubRenderer { id, category }),
            Arc::new(|_| ValidationResult::ok()),
        )
    }

    fn registry() -> ExtensibleRegistry {
        ExtensibleRegistry::new(
            Arc::new(CoreRegistry::with_builtins()),
            Arc::new(ConfigManager::new()),
        )
    }

    #[tokio::test]
    async fn test_core_lookup() {
        let registry = registry();
        let lookup = registry.lookup("hero_prism").await;

        assert!(lookup.is_resolved());
        assert_eq!(lookup.source, LookupSource::Core);
        assert!(!lookup.is_plugin);
        assert!(lookup.is_enabled);
    }

    #[tokio::test]
    async fn test_plugin_lookup() {
        let registry = registry();
        registry
            .register_component(plugin("custom_hero", ComponentCategory::Hero))
            .await;

        let lookup = registry.lookup("custom_hero").await;
        assert!(lookup.is_resolved());
        assert_eq!(lookup.source, LookupSource::Plugin);
        assert!(lookup.is_plugin);
        assert!(lookup.is_enabled);
    }

    #[tokio::test]
    async fn test_not_found_lookup() {
        let registry = registry();
        let lookup = registry.lookup("ghost").await;

        assert!(!lookup.is_resolved());
        assert!(lookup.metadata.is_none());
        assert_eq!(lookup.source, LookupSource::NotFound);
    }

    #[tokio::test]
    async fn test_core_never_shadowed_by_plugin() {
        let registry = registry();
        let outcome = registry
            .register_component(plugin("hero_prism", ComponentCategory::Hero))
            .await;
        assert!(outcome.success);

        // 같은 id로 등록해도 해석은 여전히 core
        let lookup = registry.lookup("hero_prism").await;
        assert_eq!(lookup.source, LookupSource::Core);
        assert!(!lookup.is_plugin);
    }

    #[tokio::test]
    async fn test_unregister_refuses_core() {
        let registry = registry();
        assert!(!registry.unregister_component("hero_prism").await);
        assert!(registry.core.contains("hero_prism"));

        registry
            .register_component(plugin("custom_hero", ComponentCategory::Hero))
            .await;
        assert!(registry.unregister_component("custom_hero").await);
        assert!(!registry.contains("custom_hero").await);
    }

    #[tokio::test]
    async fn test_core_survives_plugin_churn() {
        let registry = registry();
        let before = registry.core.len();

        for _ in 0..3 {
            registry
                .register_component(plugin("custom_hero", ComponentCategory::Hero))
                .await;
            registry.unregister_component("custom_hero").await;
        }

        assert_eq!(registry.core.len(), before);
        for id in registry.core.ids() {
            assert!(registry.lookup(&id).await.is_resolved());
        }
    }

    #[tokio::test]
    async fn test_disabled_plugin_still_resolves() {
        let registry = registry();
        registry
            .register_component(plugin("custom_hero", ComponentCategory::Hero))
            .await;
        registry.plugins.set_enabled("custom_hero", false).await;

        let lookup = registry.lookup("custom_hero").await;
        assert!(lookup.is_resolved());
        assert!(!lookup.is_enabled);
    }

    #[tokio::test]
    async fn test_globally_disabled_core_reports_not_enabled() {
        let registry = registry();
        registry.config.disable("hero_prism").await;

        let lookup = registry.lookup("hero_prism").await;
        assert!(lookup.is_resolved());
        assert!(!lookup.is_enabled);
    }

    #[tokio::test]
    async fn test_by_category_merges_enabled_plugins() {
        let registry = registry();
        registry
            .register_component(plugin("custom_hero", ComponentCategory::Hero))
            .await;
        registry
            .register_component(plugin("custom_hero_2", ComponentCategory::Hero))
            .await;
        registry.plugins.set_enabled("custom_hero_2", false).await;

        let heroes = registry.by_category(ComponentCategory::Hero).await;
        assert!(heroes.contains(&"hero_prism".to_string()));
        assert!(heroes.contains(&"hero_terminal".to_string()));
        assert!(heroes.contains(&"custom_hero".to_string()));
        assert!(!heroes.contains(&"custom_hero_2".to_string()));
    }

    #[tokio::test]
    async fn test_fallback_component_is_core() {
        let registry = registry();
        for category in ComponentCategory::ALL {
            let lookup = registry.fallback_component(category).await;
            assert!(lookup.is_resolved());
            assert_eq!(lookup.source, LookupSource::Core);
        }
    }

    #[tokio::test]
    async fn test_validate_layout_covers_plugins() {
        let registry = registry();
        registry
            .register_component(plugin("custom_hero", ComponentCategory::Hero))
            .await;

        let configs = vec![
            ComponentConfig::new("custom_hero", json!({}), 0),
            ComponentConfig::new(
                "skills_dots",
                json!({ "skills": [{ "name": "Rust", "level": 4 }] }),
                1,
            ),
        ];
        let result = registry.validate_layout(&configs).await;

        assert!(result.valid);
        // 플러그인 hero도 hero로 집계됨
        assert!(!result.warnings.iter().any(|w| w.contains("hero")));
    }
}
