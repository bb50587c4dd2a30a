//! Plugin Traits - 외부 컴포넌트 계약
//!
//! 플러그인은 렌더러 + 메타데이터 + 검증기 묶음이며, 선택적으로
//! 생명주기 훅과 AI function-calling 기술자를 실어 나릅니다.

use async_trait::async_trait;
use folio_foundation::{ComponentMetadata, ComponentRenderer, PropValidator, Result};
use serde_json::Value;
use std::sync::Arc;

/// 플러그인 생명주기 훅
///
/// 두 훅 모두 기본 no-op입니다. 훅의 `Err`는 등록/해제를 실패시키지
/// 않고 경고로 기록됩니다.
#[async_trait]
pub trait PluginHooks: Send + Sync {
    /// 등록 직후 호출
    async fn on_register(&self) -> Result<()> {
        Ok(())
    }

    /// 해제 직전 호출
    async fn on_unregister(&self) -> Result<()> {
        Ok(())
    }
}

/// 등록 가능한 외부 컴포넌트 묶음
#[derive(Clone)]
pub struct PortfolioPlugin {
    /// 컴포넌트 식별자 (메타데이터 id와 일치해야 함)
    pub id: String,
    /// 컴포넌트 메타데이터
    pub metadata: ComponentMetadata,
    /// 렌더러
    pub renderer: Arc<dyn ComponentRenderer>,
    /// prop 검증기
    pub validator: PropValidator,
    /// 생명주기 훅 (선택)
    pub hooks: Option<Arc<dyn PluginHooks>>,
    /// 상류에 광고되는 AI function-calling 기술자 (선택)
    pub tool_definition: Option<Value>,
}

impl PortfolioPlugin {
    /// 최소 구성 플러그인 생성
    pub fn new(
        metadata: ComponentMetadata,
        renderer: Arc<dyn ComponentRenderer>,
        validator: PropValidator,
    ) -> Self {
        Self {
            id: metadata.id.clone(),
            metadata,
            renderer,
            validator,
            hooks: None,
            tool_definition: None,
        }
    }

    /// 생명주기 훅 부착
    pub fn with_hooks(mut self, hooks: Arc<dyn PluginHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// function-calling 기술자 부착
    pub fn with_tool_definition(mut self, definition: Value) -> Self {
        self.tool_definition = Some(definition);
        self
    }
}

impl std::fmt::Debug for PortfolioPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioPlugin")
            .field("id", &self.id)
            .field("category", &self.metadata.category)
            .field("has_hooks", &self.hooks.is_some())
            .field("has_tool_definition", &self.tool_definition.is_some())
            .finish()
    }
}
