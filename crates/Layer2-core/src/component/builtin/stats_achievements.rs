//! Stats Achievements - 성과/수치 섹션
//!
//! Stats 카테고리의 유일한 core 컴포넌트이자 fallback.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::require_list;

/// Stats Achievements 렌더러
pub struct StatsAchievements;

impl StatsAchievements {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "stats_achievements";

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Stats Achievements", ComponentCategory::Stats)
            .with_description("Highlight card grid of achievements and key numbers")
            .with_required_props(&["achievements"])
    }

    /// Prop 검증기
    pub fn validator() -> PropValidator {
        Arc::new(|props| {
            let mut result = ValidationResult::ok();
            if let Some(achievements) = require_list(&mut result, props, "achievements") {
                if achievements.is_empty() {
                    result.add_error("prop 'achievements' must not be empty");
                }
            }
            result
        })
    }

    /// 항목 하나를 라벨 문자열로 변환 (문자열 또는 {label, value} 객체 허용)
    fn entry_text(entry: &Value) -> String {
        match entry {
            Value::String(s) => s.clone(),
            Value::Object(_) => {
                let label = entry.get("label").and_then(Value::as_str).unwrap_or("");
                let value = entry.get("value").and_then(Value::as_str).unwrap_or("");
                if value.is_empty() {
                    label.to_string()
                } else {
                    format!("{}: {}", label, value)
                }
            }
            other => other.to_string(),
        }
    }
}

impl Default for StatsAchievements {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for StatsAchievements {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Stats
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let mut html = String::from("<ul class=\"stats__grid\">");
        if let Some(achievements) = props.get("achievements").and_then(Value::as_array) {
            for entry in achievements {
                html.push_str(&format!(
                    "<li class=\"stats__card\" style=\"border-color:{}\">{}</li>",
                    theme.accent,
                    html_escape(&Self::entry_text(entry)),
                ));
            }
        }
        html.push_str("</ul>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Stats),
            css_class: format!("stats stats-achievements {}", theme.css_class),
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
    fn test_empty_achievements_is_error() {
        let validator = StatsAchievements::validator();
        assert!(!validator(&json!({ "achievements": [] })).valid);
        assert!(!validator(&json!({})).valid);
    }

    #[test]
    fn test_mixed_entry_shapes_render() {
        let renderer = StatsAchievements::new();
        let section = renderer
            .render(
                &json!({
                    "achievements": [
                        "Shipped 12 products",
                        { "label": "Users", "value": "2M" }
                    ]
                }),
                palettes::definition_for("neon_grid"),
            )
            .unwrap();
        assert!(section.html.contains("Shipped 12 products"));
        assert!(section.html.contains("Users: 2M"));
    }
}
