//! Core Traits - 핵심 인터페이스
//!
//! 렌더러와 prop 검증기의 계약을 정의합니다.
//!
//! ## 설계 원칙
//!
//! 1. **렌더러는 불투명 callable**: 레지스트리는 검증된 props와 테마를
//!    전달할 의무만 가집니다
//! 2. **검증기는 순수 함수**: 입력을 변경하지 않고, 동일 입력에 결정적

use serde_json::Value;
use std::sync::Arc;

use super::types::{ComponentCategory, RenderedSection, ThemeDefinition, ValidationResult};
use crate::error::Result;

// ============================================================================
// ComponentRenderer
// ============================================================================

/// 컴포넌트 렌더러 인터페이스
///
/// 검증된 prop bag과 활성 테마를 받아 섹션 하나를 생성합니다.
/// 모든 레지스트리 연산은 동기/단일 스텝이므로 렌더링도 동기입니다.
pub trait ComponentRenderer: Send + Sync {
    /// 컴포넌트 식별자 (레지스트리 키)
    fn id(&self) -> &str;

    /// 카테고리 (등록 후 변경 불가)
    fn category(&self) -> ComponentCategory;

    /// 섹션 렌더링
    ///
    /// # Arguments
    /// * `props` - 검증을 통과한 JSON prop bag
    /// * `theme` - 현재 활성 테마 정의
    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection>;
}

// ============================================================================
// PropValidator
// ============================================================================

/// Prop 검증기 - untyped bag을 받아 ValidationResult를 반환하는 순수 함수
///
/// 입력을 변경해서는 안 되며, 동일 입력에 대해 결정적이어야 합니다.
pub type PropValidator = Arc<dyn Fn(&Value) -> ValidationResult + Send + Sync>;
