//! Core Registry - 고정 컴포넌트 레지스트리
//!
//! 프로세스 시작 시 builtin 7종으로 정확히 한 번 구성되며 이후
//! 변경되지 않습니다. 조회는 절대 패닉/에러 없이 `Option`으로
//! 응답하고, 검증 실패는 `ValidationResult` 데이터로 반환됩니다.

use crate::component::builtin;
use crate::component::validate::check_order;
use crate::registry::layout_warnings;
use folio_foundation::{
    ComponentCategory, ComponentConfig, ComponentMetadata, ComponentRenderer, PropValidator,
    ValidationResult,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// core 레지스트리 항목
struct CoreEntry {
    renderer: Arc<dyn ComponentRenderer>,
    metadata: ComponentMetadata,
    validator: PropValidator,
}

/// 고정 core 컴포넌트 레지스트리
///
/// ## 사용법
/// ```ignore
/// let registry = CoreRegistry::with_builtins();
///
/// if let Some(renderer) = registry.get("hero_prism") {
///     let section = renderer.render(&props, theme)?;
/// }
/// ```
pub struct CoreRegistry {
    entries: HashMap<String, CoreEntry>,
}

impl CoreRegistry {
    /// builtin 7종으로 구성된 레지스트리 생성
    pub fn with_builtins() -> Self {
        let mut entries = HashMap::new();
        for (renderer, metadata, validator) in builtin::registrations() {
            entries.insert(
                metadata.id.clone(),
                CoreEntry {
                    renderer,
                    metadata,
                    validator,
                },
            );
        }
        Self { entries }
    }

    /// 렌더러 조회 - 미등록이면 None, 절대 에러 없음
    pub fn get(&self, id: &str) -> Option<Arc<dyn ComponentRenderer>> {
        self.entries.get(id).map(|e| Arc::clone(&e.renderer))
    }

    /// 메타데이터 조회
    pub fn metadata(&self, id: &str) -> Option<ComponentMetadata> {
        self.entries.get(id).map(|e| e.metadata.clone())
    }

    /// 식별자 존재 여부
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// 모든 core 식별자
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// 등록된 컴포넌트 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 비어있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 카테고리별 식별자 조회 (그룹 정확성만 보장, 순서는 비보장)
    pub fn by_category(&self, category: ComponentCategory) -> Vec<String> {
        self.entries
            .values()
            .filter(|e| e.metadata.category == category)
            .map(|e| e.metadata.id.clone())
            .collect()
    }

    /// 카테고리 fallback 식별자
    ///
    /// core가 온전한 한 어떤 카테고리도 후보 0이 될 수 없습니다.
    pub fn fallback_for(category: ComponentCategory) -> &'static str {
        match category {
            ComponentCategory::Hero => builtin::HeroPrism::NAME,
            ComponentCategory::Experience => builtin::ExperienceTimeline::NAME,
            ComponentCategory::Skills => builtin::SkillsDots::NAME,
            ComponentCategory::Stats => builtin::StatsAchievements::NAME,
        }
    }

    /// 식별자의 카테고리 조회
    pub fn category_of(&self, id: &str) -> Option<ComponentCategory> {
        self.entries.get(id).map(|e| e.metadata.category)
    }

    // ========================================================================
    // 검증
    // ========================================================================

    /// Prop 검증 - 미등록 식별자는 단일 에러
    pub fn validate_props(&self, id: &str, props: &Value) -> ValidationResult {
        match self.entries.get(id) {
            Some(entry) => (entry.validator)(props),
            None => ValidationResult::error(format!("unknown component type '{}'", id)),
        }
    }

    /// 컴포넌트 설정 하나 검증 (prop + order)
    pub fn validate_config(&self, config: &ComponentConfig) -> ValidationResult {
        let mut result = self.validate_props(&config.component, &config.props);
        check_order(&mut result, config.order);
        result
    }

    /// 레이아웃 전체 검증
    ///
    /// 항목별 검증에 더해 레이아웃 수준 경고(빈 레이아웃, hero 개수,
    /// 중복 order)를 계산합니다. 경고는 유효성을 깨뜨리지 않습니다.
    pub fn validate_layout(&self, configs: &[ComponentConfig]) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (i, config) in configs.iter().enumerate() {
            let entry = self
                .validate_config(config)
                .labeled(&format!("{} (#{})", config.component, i));
            result.merge(entry);
        }

        layout_warnings(&mut result, configs, |id| self.category_of(id));
        result
    }
}

impl Default for CoreRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// ============================================================================
// 테스트
// ============================================================================
