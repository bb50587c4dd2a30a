//! Core Types - 공유 어휘 정의
//!
//! 업스트림 AI 서비스가 생성하는 레이아웃과 레지스트리가 주고받는
//! 데이터 타입들. 로직 없이 타입만 정의합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::traits::ComponentRenderer;

// ============================================================================
// Component Category
// ============================================================================

/// 컴포넌트 카테고리 - 레이아웃 구성 규칙과 fallback 선택에 사용되는 닫힌 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    /// 페이지 상단 소개 영역
    Hero,
    /// 경력 사항
    Experience,
    /// 기술 스택
    Skills,
    /// 수치/성과
    Stats,
}

impl ComponentCategory {
    /// 모든 카테고리
    pub const ALL: [ComponentCategory; 4] = [
        ComponentCategory::Hero,
        ComponentCategory::Experience,
        ComponentCategory::Skills,
        ComponentCategory::Stats,
    ];

    /// 카테고리 문자열 반환
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Stats => "stats",
        }
    }

    /// 문자열에서 파싱
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hero" => Some(Self::Hero),
            "experience" => Some(Self::Experience),
            "skills" => Some(Self::Skills),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Theme
// ============================================================================

/// 테마 식별자 - 정확히 세 가지 팔레트만 존재
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    /// 네온 글로우 다크 테마 (기본값)
    NeonGrid,
    /// 오로라 그라데이션 테마
    Aurora,
    /// 밝은 지면 테마
    Paper,
}

impl ThemeId {
    /// 기본 테마
    pub const DEFAULT: ThemeId = ThemeId::NeonGrid;

    /// 모든 테마
    pub const ALL: [ThemeId; 3] = [ThemeId::NeonGrid, ThemeId::Aurora, ThemeId::Paper];

    /// 테마 문자열 반환
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeonGrid => "neon_grid",
            Self::Aurora => "aurora",
            Self::Paper => "paper",
        }
    }

    /// 문자열에서 파싱
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "neon_grid" => Some(Self::NeonGrid),
            "aurora" => Some(Self::Aurora),
            "paper" => Some(Self::Paper),
            _ => None,
        }
    }

    /// 알 수 없는 식별자는 기본 테마로 대체 (항상 성공)
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::DEFAULT)
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 테마 정의 - 컴파일 타임에 고정되는 색상 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDefinition {
    /// 테마 식별자
    pub id: ThemeId,
    /// 주 색상
    pub primary: &'static str,
    /// 배경/보조 색상
    pub secondary: &'static str,
    /// 강조 색상
    pub accent: &'static str,
    /// 글로우 효과 색상
    pub glow: &'static str,
    /// CSS 클래스 태그
    pub css_class: &'static str,
}

// ============================================================================
// Validation Result
// ============================================================================

/// 검증 결과 - 에러는 유효성을 깨뜨리고, 경고는 절대 깨뜨리지 않습니다
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// 유효 여부 (에러가 하나라도 있으면 false)
    pub valid: bool,

    /// 하드 에러 - 렌더링을 막습니다
    pub errors: Vec<String>,

    /// 소프트 경고 - 참고용, 렌더링을 막지 않습니다
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// 에러/경고 없는 유효한 결과
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: vec![],
            warnings: vec![],
        }
    }

    /// 단일 에러 결과
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![message.into()],
            warnings: vec![],
        }
    }

    /// 단일 경고 결과 (유효함)
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            errors: vec![],
            warnings: vec![message.into()],
        }
    }

    /// 에러 추가 (유효성도 함께 갱신)
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    /// 경고 추가
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// 다른 결과를 병합
    pub fn merge(&mut self, other: ValidationResult) {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// 모든 메시지 앞에 라벨을 붙인 사본
    pub fn labeled(self, label: &str) -> Self {
        Self {
            valid: self.valid,
            errors: self
                .errors
                .into_iter()
                .map(|e| format!("{}: {}", label, e))
                .collect(),
            warnings: self
                .warnings
                .into_iter()
                .map(|w| format!("{}: {}", label, w))
                .collect(),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// Component Metadata
// ============================================================================

/// 컴포넌트 메타데이터 - 등록된 모든 식별자에 정확히 하나씩 존재
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// 컴포넌트 식별자
    pub id: String,

    /// 표시 이름
    pub display_name: String,

    /// 설명
    pub description: String,

    /// 카테고리 (등록 후 변경 불가)
    pub category: ComponentCategory,

    /// 필수 prop 이름 목록
    pub required_props: Vec<String>,

    /// 선택 prop 이름 목록
    pub optional_props: Vec<String>,
}

impl ComponentMetadata {
    /// 새 메타데이터 생성
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            category,
            required_props: vec![],
            optional_props: vec![],
        }
    }

    /// 빌더 패턴: 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 빌더 패턴: 필수 prop 설정
    pub fn with_required_props(mut self, props: &[&str]) -> Self {
        self.required_props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// 빌더 패턴: 선택 prop 설정
    pub fn with_optional_props(mut self, props: &[&str]) -> Self {
        self.optional_props = props.iter().map(|p| p.to_string()).collect();
        self
    }
}

// ============================================================================
// Layout
// ============================================================================

/// 레이아웃 내 컴포넌트 하나의 요청 설정
///
/// 최종 렌더 순서는 배열 위치가 아니라 `order` 오름차순입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// 컴포넌트 식별자 (임의 문자열 허용 - 검증에서 걸러냄)
    pub component: String,

    /// Untyped prop bag
    #[serde(default)]
    pub props: Value,

    /// 렌더 순서 (음수는 검증 에러)
    #[serde(default)]
    pub order: i64,
}

impl ComponentConfig {
    /// 새 설정 생성
    pub fn new(component: impl Into<String>, props: Value, order: i64) -> Self {
        Self {
            component: component.into(),
            props,
            order,
        }
    }
}

/// 업스트림(백엔드 AI 서비스)이 생성하는 레이아웃 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// 컴포넌트 설정 목록
    pub components: Vec<ComponentConfig>,

    /// 테마 식별자 (임의 문자열 허용 - 무효하면 기본 테마로 대체)
    #[serde(default)]
    pub theme: String,

    /// 후보자 프로필 원본 블롭
    #[serde(default)]
    pub profile: Option<Value>,
}

/// 후보자 프로필의 타입 있는 투영
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// 이름
    #[serde(default)]
    pub name: String,

    /// 직함
    #[serde(default)]
    pub title: String,

    /// 요약
    #[serde(default)]
    pub summary: Option<String>,

    /// 외부 링크 (github, linkedin 등)
    #[serde(default)]
    pub links: HashMap<String, String>,
}

impl CandidateProfile {
    /// 원본 블롭에서 파싱 (실패 시 None)
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

// ============================================================================
// Rendered Section
// ============================================================================

/// 렌더러 출력 단위 - 테마가 반영된 HTML 섹션
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedSection {
    /// 생성한 컴포넌트 식별자
    pub component: String,

    /// 카테고리 (placeholder 섹션은 None)
    pub category: Option<ComponentCategory>,

    /// 섹션 CSS 클래스
    pub css_class: String,

    /// 섹션 HTML 조각
    pub html: String,
}

// ============================================================================
// Registry Lookup
// ============================================================================

/// 식별자 해석 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    /// 고정 core 레지스트리
    Core,
    /// 런타임 등록 플러그인
    Plugin,
    /// 미등록 식별자
    NotFound,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Plugin => "plugin",
            Self::NotFound => "not_found",
        }
    }
}

/// 식별자 해석 결과 - 저장되지 않는 순수 계산 투영
#[derive(Clone)]
pub struct RegistryLookupResult {
    /// 렌더러 핸들 (미등록이면 None)
    pub renderer: Option<Arc<dyn ComponentRenderer>>,

    /// 메타데이터 (미등록이면 None)
    pub metadata: Option<ComponentMetadata>,

    /// 플러그인 여부
    pub is_plugin: bool,

    /// 현재 활성 여부
    pub is_enabled: bool,

    /// 해석 출처
    pub source: LookupSource,
}

impl RegistryLookupResult {
    /// 미등록 식별자 결과
    pub fn not_found() -> Self {
        Self {
            renderer: None,
            metadata: None,
            is_plugin: false,
            is_enabled: false,
            source: LookupSource::NotFound,
        }
    }

    /// 렌더러가 해석되었는지 확인
    pub fn is_resolved(&self) -> bool {
        self.renderer.is_some()
    }
}

impl std::fmt::Debug for RegistryLookupResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryLookupResult")
            .field("renderer", &self.renderer.as_ref().map(|r| r.id().to_string()))
            .field("metadata", &self.metadata)
            .field("is_plugin", &self.is_plugin)
            .field("is_enabled", &self.is_enabled)
            .field("source", &self.source)
            .finish()
    }
}
