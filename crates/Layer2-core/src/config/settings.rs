//! Configuration Types - 전역/컴포넌트 설정과 패치 병합
//!
//! 설정은 "기본값 + 컴포넌트별 패치" 구조입니다. 읽기 시점에
//! 깊은 병합을 수행하므로 패치는 바꾸고 싶은 필드만 싣습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 프로세스 전역 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// 레이아웃당 최대 컴포넌트 수
    pub max_components: usize,

    /// core 외 컴포넌트 허용 여부
    pub allow_custom_components: bool,

    /// 디버그 모드
    pub debug: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            max_components: 20,
            allow_custom_components: true,
            debug: false,
        }
    }
}

/// 컴포넌트 하나에 적용되는 완전한 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettings {
    /// 애니메이션 사용 여부
    pub animations_enabled: bool,

    /// 애니메이션 길이 (ms)
    pub animation_duration_ms: u64,

    /// 툴팁 표시 여부
    pub show_tooltips: bool,

    /// 추가 CSS 클래스
    pub custom_classes: Vec<String>,

    /// 테마 토큰 오버라이드 (토큰명 → 값)
    pub theme_overrides: HashMap<String, String>,

    /// 기능 플래그
    pub feature_flags: HashMap<String, bool>,
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            animation_duration_ms: 300,
            show_tooltips: true,
            custom_classes: vec![],
            theme_overrides: HashMap::new(),
            feature_flags: HashMap::new(),
        }
    }
}

impl ComponentSettings {
    /// 패치 적용 - 스칼라는 교체, 목록은 이어붙이기, 맵은 키 단위 병합
    pub fn merged_with(&self, patch: &ComponentSettingsPatch) -> ComponentSettings {
        let mut merged = self.clone();

        if let Some(v) = patch.animations_enabled {
            merged.animations_enabled = v;
        }
        if let Some(v) = patch.animation_duration_ms {
            merged.animation_duration_ms = v;
        }
        if let Some(v) = patch.show_tooltips {
            merged.show_tooltips = v;
        }
        merged
            .custom_classes
            .extend(patch.custom_classes.iter().cloned());
        for (k, v) in &patch.theme_overrides {
            merged.theme_overrides.insert(k.clone(), v.clone());
        }
        for (k, v) in &patch.feature_flags {
            merged.feature_flags.insert(k.clone(), *v);
        }

        merged
    }
}

/// 컴포넌트별 설정 패치 - 명시된 필드만 기본값을 덮어씀
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsPatch {
    /// 애니메이션 사용 여부 오버라이드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations_enabled: Option<bool>,

    /// 애니메이션 길이 오버라이드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u64>,

    /// 툴팁 표시 오버라이드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tooltips: Option<bool>,

    /// 추가 CSS 클래스 (기본값 뒤에 이어붙음)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_classes: Vec<String>,

    /// 테마 토큰 오버라이드 (패치 우선)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub theme_overrides: HashMap<String, String>,

    /// 기능 플래그 (패치 우선)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub feature_flags: HashMap<String, bool>,
}

impl ComponentSettingsPatch {
    /// 비어있는 패치인지 (아무것도 덮어쓰지 않음)
    pub fn is_empty(&self) -> bool {
        self.animations_enabled.is_none()
            && self.animation_duration_ms.is_none()
            && self.show_tooltips.is_none()
            && self.custom_classes.is_empty()
            && self.theme_overrides.is_empty()
            && self.feature_flags.is_empty()
    }
}

/// 컴포넌트 렌더 관측 기록 (관측 전용 - 동작에 영향 없음)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentTelemetry {
    /// 누적 렌더 횟수
    pub render_count: u64,

    /// 마지막 렌더 시각
    pub last_render: Option<DateTime<Utc>>,

    /// 렌더 에러 메시지 누적
    pub errors: Vec<String>,
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ComponentSettings::default();
        assert!(settings.animations_enabled);
        assert_eq!(settings.animation_duration_ms, 300);
        assert!(settings.show_tooltips);
        assert!(settings.custom_classes.is_empty());

        let global = GlobalSettings::default();
        assert_eq!(global.max_components, 20);
        assert!(global.allow_custom_components);
        assert!(!global.debug);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let defaults = ComponentSettings::default();
        let patch = ComponentSettingsPatch::default();
        assert!(patch.is_empty());
        assert_eq!(defaults.merged_with(&patch), defaults);
    }

    #[test]
    fn test_scalar_override() {
        let defaults = ComponentSettings::default();
        let patch = ComponentSettingsPatch {
            animations_enabled: Some(false),
            animation_duration_ms: Some(500),
            ..Default::default()
        };

        let merged = defaults.merged_with(&patch);
        assert!(!merged.animations_enabled);
        assert_eq!(merged.animation_duration_ms, 500);
        // 패치에 없는 필드는 기본값 유지
        assert!(merged.show_tooltips);
    }

    #[test]
    fn test_list_concatenation_default_first() {
        let defaults = ComponentSettings {
            custom_classes: vec!["base".to_string()],
            ..Default::default()
        };
        let patch = ComponentSettingsPatch {
            custom_classes: vec!["extra".to_string()],
            ..Default::default()
        };

        let merged = defaults.merged_with(&patch);
        assert_eq!(merged.custom_classes, vec!["base", "extra"]);
    }

    #[test]
    fn test_map_merge_patch_wins() {
        let mut defaults = ComponentSettings::default();
        defaults
            .theme_overrides
            .insert("glow".to_string(), "#111111".to_string());
        defaults.feature_flags.insert("beta".to_string(), false);

        let mut patch = ComponentSettingsPatch::default();
        patch
            .theme_overrides
            .insert("glow".to_string(), "#ff2e97".to_string());
        patch
            .theme_overrides
            .insert("accent".to_string(), "#34d399".to_string());
        patch.feature_flags.insert("beta".to_string(), true);

        let merged = defaults.merged_with(&patch);
        assert_eq!(merged.theme_overrides["glow"], "#ff2e97");
        assert_eq!(merged.theme_overrides["accent"], "#34d399");
        assert_eq!(merged.feature_flags["beta"], true);
    }
}
