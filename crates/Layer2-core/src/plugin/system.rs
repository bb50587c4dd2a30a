//! Plugin System - 외부 컴포넌트 등록/해제/활성화 관리
//!
//! 구조 검증 → 덮어쓰기 감지 → 저장 → 설정 시드 → 훅 순서로
//! 등록을 진행합니다. 훅 실패는 등록을 막지 않습니다.
//!
//! core 식별자와의 충돌은 이 계층에서 거부하지 않습니다. core 우선권은
//! 조회 측(ExtensibleRegistry)이 강제하므로 같은 id의 플러그인은
//! 저장만 될 뿐 절대 해석되지 않습니다.

use crate::plugin::traits::PortfolioPlugin;
use folio_foundation::{ComponentMetadata, ValidationResult};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// 플러그인별 동작 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginConfig {
    /// 활성화 여부
    pub enabled: bool,
    /// 노출 우선순위 (내림차순 정렬)
    pub priority: i32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: 0,
        }
    }
}

/// 등록 시도 결과
#[derive(Debug, Clone, Default)]
pub struct RegistrationOutcome {
    /// 등록 성공 여부
    pub success: bool,
    /// 등록을 막은 에러
    pub errors: Vec<String>,
    /// 비차단 경고 (덮어쓰기, 훅 실패 등)
    pub warnings: Vec<String>,
}

/// 외부 컴포넌트 플러그인 관리자
///
/// ## 사용법
/// ```ignore
/// let system = PluginSystem::new();
/// let outcome = system.register(plugin).await;
/// assert!(outcome.success);
/// ```
pub struct PluginSystem {
    plugins: RwLock<HashMap<String, PortfolioPlugin>>,
    configs: RwLock<HashMap<String, PluginConfig>>,
}

impl PluginSystem {
    /// 빈 플러그인 시스템 생성
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
            configs: RwLock::new(HashMap::new()),
        }
    }

    // ========================================================================
    // 등록 / 해제
    // ========================================================================

    /// 플러그인 등록
    ///
    /// 같은 id가 이미 있으면 교체하고 "overwritten" 경고를 남깁니다.
    /// 기존 설정(활성화/우선순위)은 교체 시 보존됩니다.
    pub async fn register(&self, plugin: PortfolioPlugin) -> RegistrationOutcome {
        let mut outcome = RegistrationOutcome::default();

        // 구조 검증
        if plugin.id.trim().is_empty() {
            outcome.errors.push("plugin id must not be empty".to_string());
        }
        if plugin.metadata.display_name.trim().is_empty() {
            outcome
                .errors
                .push("plugin display name must not be empty".to_string());
        }
        if plugin.metadata.id != plugin.id {
            outcome.errors.push(format!(
                "metadata id '{}' does not match plugin id '{}'",
                plugin.metadata.id, plugin.id
            ));
        }
        if !outcome.errors.is_empty() {
            warn!(plugin_id = %plugin.id, errors = ?outcome.errors, "Plugin registration rejected");
            return outcome;
        }

        let id = plugin.id.clone();
        let hooks = plugin.hooks.clone();

        let replaced = {
            let mut plugins = self.plugins.write().await;
            plugins.insert(id.clone(), plugin).is_some()
        };
        if replaced {
            outcome
                .warnings
                .push(format!("plugin '{}' overwritten by re-registration", id));
        }

        // 설정 시드 - 재등록 시 기존 값 보존
        {
            let mut configs = self.configs.write().await;
            configs.entry(id.clone()).or_default();
        }

        if let Some(hooks) = hooks {
            if let Err(e) = hooks.on_register().await {
                warn!(plugin_id = %id, error = %e, "Plugin on_register hook failed");
                outcome
                    .warnings
                    .push(format!("on_register hook failed: {}", e));
            }
        }

        info!(plugin_id = %id, replaced, "Plugin registered");
        outcome.success = true;
        outcome
    }

    /// 플러그인 해제 - 설정도 함께 제거
    pub async fn unregister(&self, id: &str) -> bool {
        let removed = {
            let mut plugins = self.plugins.write().await;
            plugins.remove(id)
        };

        let Some(plugin) = removed else {
            debug!(plugin_id = %id, "Unregister requested for unknown plugin");
            return false;
        };

        if let Some(hooks) = &plugin.hooks {
            if let Err(e) = hooks.on_unregister().await {
                warn!(plugin_id = %id, error = %e, "Plugin on_unregister hook failed");
            }
        }

        let mut configs = self.configs.write().await;
        configs.remove(id);

        info!(plugin_id = %id, "Plugin unregistered");
        true
    }

    // ========================================================================
    // 설정
    // ========================================================================

    /// 플러그인 활성화 상태 변경 - 미등록이면 false
    pub async fn set_enabled(&self, id: &str, enabled: bool) -> bool {
        let mut configs = self.configs.write().await;
        match configs.get_mut(id) {
            Some(config) => {
                config.enabled = enabled;
                debug!(plugin_id = %id, enabled, "Plugin availability changed");
                true
            }
            None => false,
        }
    }

    /// 노출 우선순위 변경 - 미등록이면 false
    pub async fn set_priority(&self, id: &str, priority: i32) -> bool {
        let mut configs = self.configs.write().await;
        match configs.get_mut(id) {
            Some(config) => {
                config.priority = priority;
                true
            }
            None => false,
        }
    }

    /// 플러그인 설정 조회
    pub async fn config(&self, id: &str) -> Option<PluginConfig> {
        self.configs.read().await.get(id).copied()
    }

    /// 활성화 여부 (미등록이면 false)
    pub async fn is_enabled(&self, id: &str) -> bool {
        self.configs
            .read()
            .await
            .get(id)
            .map(|c| c.enabled)
            .unwrap_or(false)
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 플러그인 조회
    pub async fn get(&self, id: &str) -> Option<PortfolioPlugin> {
        self.plugins.read().await.get(id).cloned()
    }

    /// 등록 여부
    pub async fn contains(&self, id: &str) -> bool {
        self.plugins.read().await.contains_key(id)
    }

    /// 등록된 플러그인 수
    pub async fn len(&self) -> usize {
        self.plugins.read().await.len()
    }

    /// 비어있는지 확인
    pub async fn is_empty(&self) -> bool {
        self.plugins.read().await.is_empty()
    }

    /// 메타데이터 조회
    pub async fn metadata(&self, id: &str) -> Option<ComponentMetadata> {
        self.plugins.read().await.get(id).map(|p| p.metadata.clone())
    }

    /// 활성화된 플러그인 id 목록 (우선순위 내림차순, 동률은 id 오름차순)
    pub async fn enabled_plugins(&self) -> Vec<String> {
        let plugins = self.plugins.read().await;
        let configs = self.configs.read().await;

        let mut enabled: Vec<(String, i32)> = plugins
            .keys()
            .filter_map(|id| {
                let config = configs.get(id).copied().unwrap_or_default();
                config.enabled.then(|| (id.clone(), config.priority))
            })
            .collect();
        enabled.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        enabled.into_iter().map(|(id, _)| id).collect()
    }

    /// 활성화된 플러그인의 function-calling 기술자 목록
    pub async fn tool_definitions(&self) -> Vec<Value> {
        let enabled = self.enabled_plugins().await;
        let plugins = self.plugins.read().await;

        enabled
            .iter()
            .filter_map(|id| plugins.get(id).and_then(|p| p.tool_definition.clone()))
            .collect()
    }

    /// prop 검증 - 미등록이면 단일 "unknown" 에러
    pub async fn validate_props(&self, id: &str, props: &Value) -> ValidationResult {
        match self.plugins.read().await.get(id) {
            Some(plugin) => (plugin.validator)(props),
            None => ValidationResult::error(format!("unknown component type '{}'", id)),
        }
    }
}

impl Default for PluginSystem {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 테스트
// ============================================================================
