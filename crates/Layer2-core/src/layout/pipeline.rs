//! Composition Pipeline - 레이아웃 요청에서 렌더된 페이지까지
//!
//! 테마 해석 → 검증 → 정렬 → 항목별 렌더 순서로 진행합니다.
//! 에러는 발생한 지점의 범위만 막습니다. 전체 개수 초과는 합성
//! 전체를 중단하고, 항목 단위 에러는 그 항목만 건너뛰며, 미등록
//! 식별자는 fallback 또는 placeholder로 강등됩니다.

use crate::component::html_escape;
use crate::config::ConfigManager;
use crate::registry::ExtensibleRegistry;
use crate::theme::ThemeEngine;
use folio_foundation::{
    CandidateProfile, ComponentCategory, ComponentConfig, LayoutRequest, RenderedSection,
    ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 합성 결과 페이지
#[derive(Debug, Clone)]
pub struct ComposedPage {
    /// 해석된 테마 팔레트
    pub theme: ThemeDefinition,

    /// 렌더된 섹션 (order 오름차순)
    pub sections: Vec<RenderedSection>,

    /// 검증 보고 (에러 + 비차단 경고)
    pub report: ValidationResult,
}

/// 미등록 컴포넌트 자리의 placeholder 섹션
///
/// 에러가 아니라 설계된 정상 상태입니다. 페이지는 항상 완성됩니다.
pub fn placeholder_section(id: &str, theme: &ThemeDefinition) -> RenderedSection {
    RenderedSection {
        component: id.to_string(),
        category: None,
        css_class: format!("{} section-placeholder", theme.css_class),
        html: format!(
            "<section class=\"placeholder\"><p>unknown component: {}</p></section>",
            html_escape(id)
        ),
    }
}

/// 포트폴리오 페이지 합성기
///
/// ## 사용법
/// ```ignore
/// let composer = PortfolioComposer::new(registry, config, theme_engine);
/// let page = composer.compose(request).await;
/// ```
pub struct PortfolioComposer {
    registry: Arc<ExtensibleRegistry>,
    config: Arc<ConfigManager>,
    theme: Arc<ThemeEngine>,
}

impl PortfolioComposer {
    /// 합성기 생성
    pub fn new(
        registry: Arc<ExtensibleRegistry>,
        config: Arc<ConfigManager>,
        theme: Arc<ThemeEngine>,
    ) -> Self {
        Self {
            registry,
            config,
            theme,
        }
    }

    /// 레이아웃 요청을 페이지로 합성
    pub async fn compose(&self, request: LayoutRequest) -> ComposedPage {
        if let Some(profile) = request
            .profile
            .as_ref()
            .and_then(CandidateProfile::from_value)
        {
            debug!(candidate = %profile.name, "Composing portfolio layout");
        }

        // 1. 테마 해석 - 실패 없음, 미상 입력은 기본 테마
        self.theme.set_theme(&request.theme).await;
        let theme = *self.theme.definition().await;

        // 2. 검증 - 레지스트리 관점과 설정 관점을 하나의 보고로 합침
        let mut report = self.registry.validate_layout(&request.components).await;
        let config_report = self
            .config
            .validate_layout(&request.components, &self.registry.core_ids())
            .await;
        report.merge(config_report);

        // 전체 개수 초과는 합성 자체를 중단
        let max = self.config.global_settings().await.max_components;
        if request.components.len() > max {
            warn!(
                count = request.components.len(),
                max, "Layout exceeds component cap, aborting composition"
            );
            return ComposedPage {
                theme,
                sections: vec![],
                report,
            };
        }

        // 3. order 오름차순 안정 정렬 (동률은 배열 위치 유지)
        let mut ordered: Vec<&ComponentConfig> = request.components.iter().collect();
        ordered.sort_by_key(|c| c.order);

        // 4. 항목별 렌더
        let mut sections = Vec::with_capacity(ordered.len());
        for config in ordered {
            if let Some(section) = self.render_entry(config, &theme, &mut report).await {
                sections.push(section);
            }
        }

        info!(
            sections = sections.len(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            theme = theme.css_class,
            "Layout composed"
        );
        ComposedPage {
            theme,
            sections,
            report,
        }
    }

    /// 항목 하나 렌더 - 건너뛰면 None
    async fn render_entry(
        &self,
        config: &ComponentConfig,
        theme: &ThemeDefinition,
        report: &mut ValidationResult,
    ) -> Option<RenderedSection> {
        let id = config.component.as_str();
        let lookup = self.registry.lookup(id).await;

        // 미등록 식별자: category 힌트가 있으면 core fallback, 없으면 placeholder
        let Some(renderer) = lookup.renderer else {
            return Some(self.degraded_entry(config, theme, report).await);
        };

        if !lookup.is_enabled {
            report.add_warning(format!("component '{}' is disabled, skipped", id));
            debug!(component_id = %id, "Skipping disabled component");
            return None;
        }

        // 항목 단위 에러는 이 항목만 막음 (보고에는 이미 실려 있음)
        let mut entry = self.registry.validate_props(id, &config.props).await;
        crate::component::validate::check_order(&mut entry, config.order);
        if !entry.valid {
            debug!(component_id = %id, "Skipping entry with validation errors");
            return None;
        }
        if !self.global_allows(id).await {
            return None;
        }

        match renderer.render(&config.props, theme) {
            Ok(mut section) => {
                // 컴포넌트별 설정의 추가 클래스를 섹션에 반영
                let settings = self.config.component_settings(id).await;
                for class in &settings.custom_classes {
                    section.css_class.push(' ');
                    section.css_class.push_str(class);
                }
                self.config.record_render(id).await;
                Some(section)
            }
            Err(e) => {
                warn!(component_id = %id, error = %e, "Renderer failed, emitting placeholder");
                self.config.record_render_error(id, e.to_string()).await;
                report.add_warning(format!("component '{}' failed to render", id));
                Some(placeholder_section(id, theme))
            }
        }
    }

    /// 미등록 식별자의 강등 처리
    async fn degraded_entry(
        &self,
        config: &ComponentConfig,
        theme: &ThemeDefinition,
        report: &mut ValidationResult,
    ) -> RenderedSection {
        let id = config.component.as_str();
        let hint = config
            .props
            .get("category")
            .and_then(Value::as_str)
            .and_then(ComponentCategory::parse);

        if let Some(category) = hint {
            let fallback = self.registry.fallback_component(category).await;
            if let Some(renderer) = fallback.renderer {
                if let Ok(section) = renderer.render(&config.props, theme) {
                    report.add_warning(format!(
                        "unknown component '{}' replaced with {} fallback '{}'",
                        id,
                        category,
                        renderer.id()
                    ));
                    return section;
                }
            }
        }

        report.add_warning(format!(
            "unknown component '{}' replaced with placeholder",
            id
        ));
        placeholder_section(id, theme)
    }

    /// custom 비허용 상태에서 core 외 식별자 차단
    async fn global_allows(&self, id: &str) -> bool {
        let global = self.config.global_settings().await;
        if global.allow_custom_components {
            return true;
        }
        let allowed = self.registry.core().contains(id);
        if !allowed {
            debug!(component_id = %id, "Skipping non-core component, custom components disallowed");
        }
        allowed
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalSettings;
    use crate::plugin::PortfolioPlugin;
    use crate::registry::CoreRegistry;
    use folio_foundation::{ComponentMetadata, ComponentRenderer, Error, Result};
    use serde_json::json;

    fn harness() -> (PortfolioComposer, Arc<ExtensibleRegistry>, Arc<ConfigManager>) {
        let config = Arc::new(ConfigManager::new());
        let registry = Arc::new(ExtensibleRegistry::new(
            Arc::new(CoreRegistry::with_builtins()),
            config.clone(),
        ));
        let composer = PortfolioComposer::new(
            registry.clone(),
            config.clone(),
            Arc::new(ThemeEngine::new()),
        );
        (composer, registry, config)
    }

    fn hero(order: i64) -> ComponentConfig {
        ComponentConfig::new(
            "hero_prism",
            json!({ "name": "Ada", "title": "Engineer" }),
            order,
        )
    }

    fn skills(order: i64) -> ComponentConfig {
        ComponentConfig::new(
            "skills_dots",
            json!({ "skills": [{ "name": "Rust", "level": 4 }] }),
            order,
        )
    }

    fn request(components: Vec<ComponentConfig>, theme: &str) -> LayoutRequest {
        LayoutRequest {
            components,
            theme: theme.to_string(),
            profile: None,
        }
    }

    #[tokio::test]
    async fn test_compose_valid_layout() {
        let (composer, _, _) = harness();
        let page = composer
            .compose(request(vec![skills(1), hero(0)], "neon_grid"))
            .await;

        assert!(page.report.valid);
        assert_eq!(page.sections.len(), 2);
        // order 오름차순 - 배열 위치가 아님
        assert_eq!(page.sections[0].component, "hero_prism");
        assert_eq!(page.sections[1].component, "skills_dots");
        assert_eq!(page.theme.css_class, "theme-neon-grid");
    }

    #[tokio::test]
    async fn test_compose_unknown_theme_falls_back() {
        let (composer, _, _) = harness();
        let page = composer.compose(request(vec![hero(0)], "vaporwave")).await;
        assert_eq!(page.theme.css_class, "theme-neon-grid");
    }

    #[tokio::test]
    async fn test_unknown_component_placeholder() {
        let (composer, _, _) = harness();
        let page = composer
            .compose(request(
                vec![hero(0), ComponentConfig::new("custom_widget", json!({}), 1)],
                "aurora",
            ))
            .await;

        // 미상 식별자는 보고에 에러로 남지만 페이지는 완성됨
        assert!(!page.report.valid);
        assert!(page.report.errors.iter().any(|e| e.contains("unknown")));
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[1].component, "custom_widget");
        assert!(page.sections[1].category.is_none());
        assert!(page.sections[1].css_class.contains("section-placeholder"));
    }

    #[tokio::test]
    async fn test_unknown_component_category_fallback() {
        let (composer, _, _) = harness();
        let page = composer
            .compose(request(
                vec![ComponentConfig::new(
                    "fancy_hero",
                    json!({ "category": "hero", "name": "Ada", "title": "Engineer" }),
                    0,
                )],
                "paper",
            ))
            .await;

        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].component, "hero_prism");
        assert!(page
            .report
            .warnings
            .iter()
            .any(|w| w.contains("fallback")));
    }

    #[tokio::test]
    async fn test_disabled_component_skipped() {
        let (composer, _, config) = harness();
        config.disable("skills_dots").await;

        let page = composer
            .compose(request(vec![hero(0), skills(1)], "neon_grid"))
            .await;

        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].component, "hero_prism");
        assert!(page
            .report
            .warnings
            .iter()
            .any(|w| w.contains("disabled")));
    }

    #[tokio::test]
    async fn test_cap_exceeded_aborts() {
        let (composer, _, config) = harness();
        config
            .set_global_settings(GlobalSettings {
                max_components: 1,
                ..Default::default()
            })
            .await;

        let page = composer
            .compose(request(vec![hero(0), skills(1)], "neon_grid"))
            .await;

        assert!(!page.report.valid);
        assert!(page.sections.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_entry_skipped_others_render() {
        let (composer, _, _) = harness();
        let broken = ComponentConfig::new("skills_dots", json!({ "skills": [] }), 1);

        let page = composer
            .compose(request(vec![hero(0), broken], "neon_grid"))
            .await;

        assert!(!page.report.valid);
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].component, "hero_prism");
    }

    #[tokio::test]
    async fn test_renderer_error_degrades_and_records() {
        struct ExplodingRenderer;

        impl ComponentRenderer for ExplodingRenderer {
            fn id(&self) -> &str {
                "exploding_hero"
            }

            fn category(&self) -> ComponentCategory {
                ComponentCategory::Hero
            }

            fn render(
                &self,
                _props: &Value,
                _theme: &ThemeDefinition,
            ) -> Result<RenderedSection> {
                Err(Error::render("exploding_hero", "boom"))
            }
        }

        let (composer, registry, config) = harness();
        registry
            .register_component(PortfolioPlugin::new(
                ComponentMetadata::new("exploding_hero", "Exploding Hero", ComponentCategory::Hero),
                Arc::new(ExplodingRenderer),
                Arc::new(|_| ValidationResult::ok()),
            ))
            .await;

        let page = composer
            .compose(request(
                vec![ComponentConfig::new("exploding_hero", json!({}), 0)],
                "neon_grid",
            ))
            .await;

        assert_eq!(page.sections.len(), 1);
        assert!(page.sections[0].css_class.contains("section-placeholder"));
        let telemetry = config.telemetry("exploding_hero").await.unwrap();
        assert_eq!(telemetry.render_count, 0);
        assert_eq!(telemetry.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_custom_classes_applied() {
        let (composer, _, config) = harness();
        config
            .set_component_patch(
                "hero_prism",
                crate::config::ComponentSettingsPatch {
                    custom_classes: vec!["compact".to_string()],
                    ..Default::default()
                },
            )
            .await;

        let page = composer.compose(request(vec![hero(0)], "neon_grid")).await;
        assert!(page.sections[0].css_class.contains("compact"));
    }

    #[tokio::test]
    async fn test_telemetry_recorded_per_render() {
        let (composer, _, config) = harness();
        composer.compose(request(vec![hero(0)], "neon_grid")).await;
        composer.compose(request(vec![hero(0)], "neon_grid")).await;

        let telemetry = config.telemetry("hero_prism").await.unwrap();
        assert_eq!(telemetry.render_count, 2);
    }

    #[tokio::test]
    async fn test_order_ties_keep_array_position() {
        let (composer, _, _) = harness();
        let page = composer
            .compose(request(vec![skills(0), hero(0)], "neon_grid"))
            .await;

        // 동률 order는 배열 위치 유지, 중복 경고는 비차단
        assert!(page.report.valid);
        assert_eq!(page.sections[0].component, "skills_dots");
        assert_eq!(page.sections[1].component, "hero_prism");
        assert!(page
            .report
            .warnings
            .iter()
            .any(|w| w.to_lowercase().contains("duplicate order")));
    }
}
