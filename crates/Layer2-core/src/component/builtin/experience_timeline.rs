//! Experience Timeline - 세로 타임라인 경력 섹션
//!
//! Experience 카테고리의 fallback 컴포넌트. `experiences` 목록이
//! 필수이며, 비어 있어도 유효하지만 경고가 남습니다.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::require_list;

/// Experience Timeline 렌더러
pub struct ExperienceTimeline;

impl ExperienceTimeline {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "experience_timeline";

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Experience Timeline", ComponentCategory::Experience)
            .with_description("Vertical timeline of work experience")
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

    /// 경력 항목 하나를 HTML로 렌더링
    fn render_entry(entry: &Value, theme: &ThemeDefinition) -> String {
        let role = entry.get("role").and_then(Value::as_str).unwrap_or("");
        let company = entry.get("company").and_then(Value::as_str).unwrap_or("");
        let period = entry.get("period").and_then(Value::as_str).unwrap_or("");
        let summary = entry.get("summary").and_then(Value::as_str).unwrap_or("");

        format!(
            "<li class=\"timeline__entry\" style=\"border-color:{}\">\
             <span class=\"timeline__period\">{}</span>\
             <strong class=\"timeline__role\">{}</strong>\
             <span class=\"timeline__company\">{}</span>\
             <p class=\"timeline__summary\">{}</p></li>",
            theme.accent,
            html_escape(period),
            html_escape(role),
            html_escape(company),
            html_escape(summary),
        )
    }
}

impl Default for ExperienceTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for ExperienceTimeline {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Experience
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let mut html = String::from("<ol class=\"timeline__list\">");
        if let Some(experiences) = props.get("experiences").and_then(Value::as_array) {
            for entry in experiences {
                html.push_str(&Self::render_entry(entry, theme));
            }
        }
        html.push_str("</ol>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Experience),
            css_class: format!("experience experience-timeline {}", theme.css_class),
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
    fn test_empty_list_warns_but_validates() {
        let validator = ExperienceTimeline::validator();
        let result = validator(&json!({ "experiences": [] }));
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_missing_list_is_error() {
        let validator = ExperienceTimeline::validator();
        let result = validator(&json!({}));
        assert!(!result.valid);
    }

    #[test]
    fn test_non_object_entry_is_error() {
        let validator = ExperienceTimeline::validator();
        let result = validator(&json!({ "experiences": ["just a string"] }));
        assert!(!result.valid);
    }

    #[test]
    fn test_render_entries() {
        let renderer = ExperienceTimeline::new();
        let section = renderer
            .render(
                &json!({
                    "experiences": [
                        { "role": "Engineer", "company": "Acme", "period": "2021-2024" }
                    ]
                }),
                palettes::definition_for("paper"),
            )
            .unwrap();
        assert!(section.html.contains("Acme"));
        assert!(section.css_class.contains("theme-paper"));
    }
}
