//! Skills Dots - 점 표시 기술 섹션
//!
//! Skills 카테고리의 fallback 컴포넌트. `skills` 목록이 비어 있지
//! 않아야 하며, 각 항목은 `name`을 가져야 합니다. `level`은
//! 렌더링 시 1..=5로 클램프됩니다.

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::{require_entry_strings, require_list};

/// Skills Dots 렌더러
pub struct SkillsDots;

impl SkillsDots {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "skills_dots";

    /// 최대 레벨
    const MAX_LEVEL: i64 = 5;

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Skills Dots", ComponentCategory::Skills)
            .with_description("Skill list with dot-scale proficiency levels")
            .with_required_props(&["skills"])
    }

    /// Prop 검증기
    pub fn validator() -> PropValidator {
        Arc::new(|props| {
            let mut result = ValidationResult::ok();
            if let Some(skills) = require_list(&mut result, props, "skills") {
                if skills.is_empty() {
                    result.add_error("prop 'skills' must not be empty");
                } else {
                    require_entry_strings(&mut result, skills, "skills", "name");
                }
            }
            result
        })
    }

    /// 레벨을 1..=5로 클램프
    fn clamp_level(raw: Option<i64>) -> i64 {
        raw.unwrap_or(1).clamp(1, Self::MAX_LEVEL)
    }
}

impl Default for SkillsDots {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for SkillsDots {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Skills
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let mut html = String::from("<ul class=\"skills-dots__list\">");
        if let Some(skills) = props.get("skills").and_then(Value::as_array) {
            for skill in skills {
                let name = skill.get("name").and_then(Value::as_str).unwrap_or("");
                let level = Self::clamp_level(skill.get("level").and_then(Value::as_i64));
                let dots: String = (0..Self::MAX_LEVEL)
                    .map(|i| if i < level { '●' } else { '○' })
                    .collect();
                html.push_str(&format!(
                    "<li class=\"skills-dots__item\"><span>{}</span>\
                     <span class=\"skills-dots__scale\" style=\"color:{}\">{}</span></li>",
                    html_escape(name),
                    theme.accent,
                    dots,
                ));
            }
        }
        html.push_str("</ul>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Skills),
            css_class: format!("skills skills-dots {}", theme.css_class),
            html,
        })
    }
}
