//! Experience Cards - 카드 그리드 경력 섹션
//!
//! 스키마는 `experience_timeline`과 동일합니다.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::require_list;

/// Experience Cards 렌더러
pub struct ExperienceCards;

impl ExperienceCards {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "experience_cards";

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Experience Cards", ComponentCategory::Experience)
            .with_description("Card grid of work experience")
            .with_required_props(&["experiences"])
    }

    /// Prop 검증기
    pub fn validator() -> PropValidator {
        Arc::new(|props| {
            let mut result = ValidationResult::ok();
            if let Some(experiences) = require_list(&mut result, props, "experiences") {
                if experiences.is_empty() {
                    result.add_warning("prop 'experiences' is an empty list");
                }
                for (i, entry) in experiences.iter().enumerate() {
                    if !entry.is_object() {
                        result.add_error(format!("experiences[{}] must be an object", i));
                    }
                }
            }
            result
        })
    }
}

impl Default for ExperienceCards {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for ExperienceCards {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Experience
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let mut html = String::from("<div class=\"experience-cards__grid\">");
        if let Some(experiences) = props.get("experiences").and_then(Value::as_array) {
            for entry in experiences {
                let role = entry.get("role").and_then(Value::as_str).unwrap_or("");
                let company = entry.get("company").and_then(Value::as_str).unwrap_or("");
                html.push_str(&format!(
                    "<article class=\"experience-cards__card\" style=\"box-shadow:0 0 12px {}\">\
                     <strong>{}</strong><span>{}</span></article>",
                    theme.glow,
                    html_escape(role),
                    html_escape(company),
                ));
            }
        }
        html.push_str("</div>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Experience),
            css_class: format!("experience experience-cards {}", theme.css_class),
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
    fn test_validator_same_schema_as_timeline() {
        let validator = ExperienceCards::validator();
        assert!(!validator(&json!({})).valid);
        assert!(validator(&json!({ "experiences": [] })).valid);
    }

    #[test]
    fn test_render_cards() {
        let renderer = ExperienceCards::new();
        let section = renderer
            .render(
                &json!({ "experiences": [{ "role": "CTO", "company": "Initech" }] }),
                palettes::definition_for("aurora"),
            )
            .unwrap();
        assert!(section.html.contains("Initech"));
    }
}
