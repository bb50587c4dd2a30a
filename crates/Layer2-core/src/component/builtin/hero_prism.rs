//! Hero Prism - 기본 히어로 섹션
//!
//! 이름/직함을 프리즘 카드로 보여주는 히어로. Hero 카테고리의
//! fallback 컴포넌트입니다.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::require_string;

/// Hero Prism 렌더러
pub struct HeroPrism;

impl HeroPrism {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "hero_prism";

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Hero Prism", ComponentCategory::Hero)
            .with_description("Angular prism hero card with name and title")
            .with_required_props(&["name", "title"])
            .with_optional_props(&["summary", "tagline"])
    }

    /// Prop 검증기
    pub fn validator() -> PropValidator {
        Arc::new(|props| {
            let mut result = ValidationResult::ok();
            require_string(&mut result, props, "name");
            require_string(&mut result, props, "title");
            result
        })
    }
}

impl Default for HeroPrism {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for HeroPrism {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Hero
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let name = props.get("name").and_then(Value::as_str).unwrap_or("");
        let title = props.get("title").and_then(Value::as_str).unwrap_or("");
        let tagline = props.get("tagline").and_then(Value::as_str);

        let mut html = format!(
            "<header class=\"hero-prism__inner\" style=\"--glow:{}\">\
             <h1 class=\"hero-prism__name\">{}</h1>\
             <p class=\"hero-prism__title\" style=\"color:{}\">{}</p>",
            theme.glow,
            html_escape(name),
            theme.primary,
            html_escape(title),
        );
        if let Some(tagline) = tagline {
            html.push_str(&format!(
                "<p class=\"hero-prism__tagline\">{}</p>",
                html_escape(tagline)
            ));
        }
        html.push_str("</header>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Hero),
            css_class: format!("hero hero-prism {}", theme.css_class),
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palettes;
    use serde_json::json;

    #[test]
    fn test_validator_requires_name_and_title() {
        let validator = HeroPrism::validator();

        let ok = validator(&json!({ "name": "Ada", "title": "Engineer" }));
        assert!(ok.valid);
        assert!(ok.errors.is_empty());

        let missing = validator(&json!({ "name": "Ada" }));
        assert!(!missing.valid);
        assert_eq!(missing.errors.len(), 1);
    }

    #[test]
    fn test_render_includes_theme() {
        let renderer = HeroPrism::new();
        let section = renderer
            .render(
                &json!({ "name": "Ada", "title": "Engineer" }),
                palettes::definition_for("aurora"),
            )
            .unwrap();

        assert_eq!(section.component, "hero_prism");
        assert!(section.css_class.contains("theme-aurora"));
        assert!(section.html.contains("Ada"));
    }

    #[test]
    fn test_render_escapes_html() {
        let renderer = HeroPrism::new();
        let section = renderer
            .render(
                &json!({ "name": "<script>", "title": "x" }),
                palettes::definition_for("neon_grid"),
            )
            .unwrap();
        assert!(!section.html.contains("<script>"));
    }
}
