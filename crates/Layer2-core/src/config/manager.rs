//! Configuration Manager - 프로세스 전역 설정 상태
//!
//! 전역 설정, 컴포넌트별 패치, 비활성화 집합, 렌더 관측 기록을
//! 한 곳에서 관리합니다. 전역 싱글톤이 아니라 명시적으로 생성해서
//! `Arc`로 전달합니다.
//!
//! 모든 변경은 내장 `ChangeBus`에 타입이 있는 이벤트로 게시됩니다.
//! 관측 기록(telemetry)은 변경 이벤트를 발생시키지 않습니다.

use crate::config::settings::{
    ComponentSettings, ComponentSettingsPatch, ComponentTelemetry, GlobalSettings,
};
use chrono::Utc;
use folio_foundation::{
    ChangeBus, ChangeListener, ComponentConfig, ConfigChangeEvent, ListenerId, ValidationResult,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 전역 설정 관리자
///
/// ## 사용법
/// ```ignore
/// let config = Arc::new(ConfigManager::new());
/// config.disable("skills_bars").await;
/// assert!(config.is_disabled("skills_bars").await);
/// ```
pub struct ConfigManager {
    global: RwLock<GlobalSettings>,
    defaults: RwLock<ComponentSettings>,
    overrides: RwLock<HashMap<String, ComponentSettingsPatch>>,
    disabled: RwLock<HashSet<String>>,
    telemetry: RwLock<HashMap<String, ComponentTelemetry>>,
    bus: ChangeBus,
}

impl ConfigManager {
    /// 하드코딩된 기본값으로 생성
    pub fn new() -> Self {
        Self {
            global: RwLock::new(GlobalSettings::default()),
            defaults: RwLock::new(ComponentSettings::default()),
            overrides: RwLock::new(HashMap::new()),
            disabled: RwLock::new(HashSet::new()),
            telemetry: RwLock::new(HashMap::new()),
            bus: ChangeBus::new(),
        }
    }

    // ========================================================================
    // 전역 설정
    // ========================================================================

    /// 전역 설정 조회
    pub async fn global_settings(&self) -> GlobalSettings {
        *self.global.read().await
    }

    /// 전역 설정 교체
    pub async fn set_global_settings(&self, settings: GlobalSettings) {
        {
            let mut global = self.global.write().await;
            *global = settings;
        }
        debug!(?settings, "Global settings updated");
        self.bus
            .publish(ConfigChangeEvent::global("global settings updated"))
            .await;
    }

    // ========================================================================
    // 컴포넌트 설정
    // ========================================================================

    /// 모든 컴포넌트에 적용되는 기본 설정 조회
    pub async fn default_settings(&self) -> ComponentSettings {
        self.defaults.read().await.clone()
    }

    /// 기본 설정 교체
    pub async fn set_default_settings(&self, settings: ComponentSettings) {
        {
            let mut defaults = self.defaults.write().await;
            *defaults = settings;
        }
        self.bus
            .publish(ConfigChangeEvent::global("default component settings updated"))
            .await;
    }

    /// 컴포넌트별 패치 설정 (기존 패치는 교체)
    pub async fn set_component_patch(&self, id: &str, patch: ComponentSettingsPatch) {
        {
            let mut overrides = self.overrides.write().await;
            overrides.insert(id.to_string(), patch);
        }
        debug!(component_id = %id, "Component settings patched");
        self.bus
            .publish(ConfigChangeEvent::component(id, "component settings patched"))
            .await;
    }

    /// 컴포넌트별 패치 제거
    pub async fn clear_component_patch(&self, id: &str) -> bool {
        let removed = {
            let mut overrides = self.overrides.write().await;
            overrides.remove(id).is_some()
        };
        if removed {
            self.bus
                .publish(ConfigChangeEvent::component(id, "component settings patch cleared"))
                .await;
        }
        removed
    }

    /// 컴포넌트의 최종 설정 - 읽기 시점에 기본값과 패치를 깊은 병합
    ///
    /// 어떤 식별자에 대해서도 실패하지 않습니다. 미등록 식별자도
    /// 기본값을 돌려받습니다.
    pub async fn component_settings(&self, id: &str) -> ComponentSettings {
        let defaults = self.defaults.read().await.clone();
        let overrides = self.overrides.read().await;
        match overrides.get(id) {
            Some(patch) => defaults.merged_with(patch),
            None => defaults,
        }
    }

    // ========================================================================
    // 가용성
    // ========================================================================

    /// 컴포넌트 비활성화 - 멱등
    pub async fn disable(&self, id: &str) {
        let inserted = {
            let mut disabled = self.disabled.write().await;
            disabled.insert(id.to_string())
        };
        if inserted {
            debug!(component_id = %id, "Component disabled");
            self.bus
                .publish(ConfigChangeEvent::availability(id, "component disabled"))
                .await;
        }
    }

    /// 컴포넌트 재활성화 - 멱등
    pub async fn enable(&self, id: &str) {
        let removed = {
            let mut disabled = self.disabled.write().await;
            disabled.remove(id)
        };
        if removed {
            debug!(component_id = %id, "Component enabled");
            self.bus
                .publish(ConfigChangeEvent::availability(id, "component enabled"))
                .await;
        }
    }

    /// 비활성화 여부
    pub async fn is_disabled(&self, id: &str) -> bool {
        self.disabled.read().await.contains(id)
    }

    /// 비활성화된 식별자 전체
    pub async fn disabled_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.disabled.read().await.iter().cloned().collect();
        ids.sort();
        ids
    }

    // ========================================================================
    // 레이아웃 검증
    // ========================================================================

    /// 설정 관점의 레이아웃 검증
    ///
    /// - 최대 컴포넌트 수 초과 → 에러
    /// - 비활성화된 식별자 참조 → 에러
    /// - custom 비허용 상태에서 core 외 식별자 참조 → 에러
    pub async fn validate_layout(
        &self,
        configs: &[ComponentConfig],
        core_ids: &HashSet<String>,
    ) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let global = *self.global.read().await;
        let disabled = self.disabled.read().await;

        if configs.len() > global.max_components {
            result.add_error(format!(
                "layout has {} components, exceeding the maximum of {}",
                configs.len(),
                global.max_components
            ));
        }

        for config in configs {
            if disabled.contains(&config.component) {
                result.add_error(format!(
                    "component '{}' is disabled",
                    config.component
                ));
            }
            if !global.allow_custom_components && !core_ids.contains(&config.component) {
                result.add_error(format!(
                    "custom components are not allowed: '{}'",
                    config.component
                ));
            }
        }

        result
    }

    // ========================================================================
    // 관측 기록
    // ========================================================================

    /// 렌더 성공 기록
    pub async fn record_render(&self, id: &str) {
        let mut telemetry = self.telemetry.write().await;
        let entry = telemetry.entry(id.to_string()).or_default();
        entry.render_count += 1;
        entry.last_render = Some(Utc::now());
    }

    /// 렌더 에러 기록
    pub async fn record_render_error(&self, id: &str, message: impl Into<String>) {
        let mut telemetry = self.telemetry.write().await;
        let entry = telemetry.entry(id.to_string()).or_default();
        entry.errors.push(message.into());
    }

    /// 컴포넌트 관측 기록 조회 - 기록이 전혀 없으면 None
    pub async fn telemetry(&self, id: &str) -> Option<ComponentTelemetry> {
        self.telemetry.read().await.get(id).cloned()
    }

    // ========================================================================
    // 변경 구독
    // ========================================================================

    /// 변경 리스너 등록
    pub async fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> ListenerId {
        self.bus.subscribe(listener).await
    }

    /// 변경 리스너 해제
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id).await
    }

    /// 최근 변경 이력 (최신 먼저)
    pub async fn change_history(&self, limit: usize) -> Vec<ConfigChangeEvent> {
        self.bus.history(Some(limit)).await
    }

    // ========================================================================
    // 초기화
    // ========================================================================

    /// 하드코딩된 기본값으로 복원 (테스트 격리용)
    ///
    /// 관측 기록과 변경 이력도 함께 비웁니다.
    pub async fn reset(&self) {
        {
            let mut global = self.global.write().await;
            *global = GlobalSettings::default();
        }
        {
            let mut defaults = self.defaults.write().await;
            *defaults = ComponentSettings::default();
        }
        {
            let mut overrides = self.overrides.write().await;
            overrides.clear();
        }
        {
            let mut disabled = self.disabled.write().await;
            disabled.clear();
        }
        {
            let mut telemetry = self.telemetry.write().await;
            telemetry.clear();
        }
        self.bus.clear_history().await;
        debug!("Configuration reset to defaults");
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 테스트
// ============================================================================
