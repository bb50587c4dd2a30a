//! Skills Bars - 막대 그래프 기술 섹션
//!
//! `skills_dots`와 같은 스키마에 더해, 3개 미만이면 사용성 경고를
//! 냅니다 (막대가 너무 적으면 비교가 안 됨).

use folio_foundation::{
    ComponentCategory, ComponentMetadata, ComponentRenderer, PropValidator, RenderedSection,
    Result, ThemeDefinition, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

use crate::component::html_escape;
use crate::component::validate::{require_entry_strings, require_list};

/// Skills Bars 렌더러
pub struct SkillsBars;

impl SkillsBars {
    /// 컴포넌트 식별자
    pub const NAME: &'static str = "skills_bars";

    /// 사용성 임계값 - 이 미만이면 경고
    const USABILITY_THRESHOLD: usize = 3;

    /// 새 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 메타데이터
    pub fn metadata() -> ComponentMetadata {
        ComponentMetadata::new(Self::NAME, "Skills Bars", ComponentCategory::Skills)
            .with_description("Horizontal bar chart of skill proficiency")
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
                    if skills.len() < Self::USABILITY_THRESHOLD {
                        result.add_warning(format!(
                            "fewer than {} skills makes bars hard to compare",
                            Self::USABILITY_THRESHOLD
                        ));
                    }
                }
            }
            result
        })
    }
}

impl Default for SkillsBars {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer for SkillsBars {
    fn id(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> ComponentCategory {
        ComponentCategory::Skills
    }

    fn render(&self, props: &Value, theme: &ThemeDefinition) -> Result<RenderedSection> {
        let mut html = String::from("<div class=\"skills-bars__chart\">");
        if let Some(skills) = props.get("skills").and_then(Value::as_array) {
            for skill in skills {
                let name = skill.get("name").and_then(Value::as_str).unwrap_or("");
                let level = skill
                    .get("level")
                    .and_then(Value::as_i64)
                    .unwrap_or(1)
                    .clamp(1, 5);
                let width = level * 20;
                html.push_str(&format!(
                    "<div class=\"skills-bars__row\"><span>{}</span>\
                     <div class=\"skills-bars__bar\" \
                     style=\"width:{}%;background:{}\"></div></div>",
                    html_escape(name),
                    width,
                    theme.primary,
                ));
            }
        }
        html.push_str("</div>");

        Ok(RenderedSection {
            component: Self::NAME.to_string(),
            category: Some(ComponentCategory::Skills),
            css_class: format!("skills skills-bars {}", theme.css_class),
            html,
        })
    }
}
