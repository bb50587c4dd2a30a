//! Hero Terminal - 터미널 스타일 히어로 섹션
//!
//! 이름/직함에 더해 타이핑되는 명령어 목록을 요구합니다.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::{require_list, require_string};

/// Hero Terminal 렌더러
pub struct HeroTerminal;

impl HeroTerminal {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "hero_terminal";

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Hero Terminal", ComponentCategory::Hero)
            .with_description("Terminal-style hero that types out commands")
            .with_required_props(&["name", "title", "commands"])
            .with_optional_props(&["prompt"])
    }

    /// Prop 검증기
    pub fn validator() -> PropValidator {
        Arc::new(|props| {
            let mut result = ValidationResult::ok();
            require_string(&mut result, props, "name");
            require_string(&mut result, props, "title");
            if let Some(commands) = require_list(&mut result, props, "commands") {
                if commands.is_empty() {
                    result.add_warning("prop 'commands' is an empty list");
                }
            }
            result
        })
    }
}

impl Default for HeroTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for HeroTerminal {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Hero
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let name = props.get("name").and_then(Value::as_str).unwrap_or("");
        let title = props.get("title").and_then(Value::as_str).unwrap_or("");
        let prompt = props.get("prompt").and_then(Value::as_str).unwrap_or("$");
        let commands: Vec<&str> = props
            .get("commands")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut html = format!(
            "<div class=\"hero-terminal__window\" style=\"border-color:{}\">\
             <h1 class=\"hero-terminal__name\">{}</h1>\
             <p class=\"hero-terminal__title\">{}</p><pre class=\"hero-terminal__session\">",
            theme.primary,
            html_escape(name),
            html_escape(title),
        );
        for command in commands {
            html.push_str(&format!(
                "{} {}\n",
                html_escape(prompt),
                html_escape(command)
            ));
        }
        html.push_str("</pre></div>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Hero),
            css_class: format!("hero hero-terminal {}", theme.css_class),
            html,
        })
    }
}
