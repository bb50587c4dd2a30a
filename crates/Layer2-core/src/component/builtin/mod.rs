//! Builtin Components - 고정 core 컴포넌트 7종
//!
//! ## 컴포넌트 목록
//!
//! ### Hero
//! - `hero_prism` - 프리즘 히어로 (카테고리 fallback)
//! - `hero_terminal` - 터미널 히어로 (commands 목록 필요)
//!
//! ### Experience
//! - `experience_timeline` - 세로 타임라인 (카테고리 fallback)
//! - `experience_cards` - 카드 그리드
//!
//! ### Skills
//! - `skills_dots` - 점 스케일 (카테고리 fallback)
//! - `skills_bars` - 막대 그래프 (3개 미만 경고)
//!
//! ### Stats
//! - `stats_achievements` - 성과 카드 (카테고리 fallback)
//!
//! ## Layer1 연동
//! - 모든 컴포넌트는 `folio_foundation::ComponentRenderer` trait 구현
//! - 검증기는 `PropValidator` 순수 함수

// Hero
pub mod hero_prism;
pub mod hero_terminal;

// Experience
pub mod experience_cards;
pub mod experience_timeline;

// Skills
pub mod skills_bars;
pub mod skills_dots;

// Stats
pub mod stats_achievements;

// Re-exports
pub use experience_cards::ExperienceCards;
pub use experience_timeline::ExperienceTimeline;
pub use hero_prism::HeroPrism;
pub use hero_terminal::HeroTerminal;
pub use skills_bars::SkillsBars;
pub use skills_dots::SkillsDots;
pub use stats_achievements::StatsAchievements;

use folio_foundation::{ComponentMetadata, ComponentRenderer, PropValidator};
use std::sync::Arc;

/// core 레지스트리 등록 단위
pub type BuiltinRegistration = (Arc<dyn ComponentRenderer>, ComponentMetadata, PropValidator);

/// 모든 builtin 컴포넌트의 등록 목록 생성
pub fn registrations() -> Vec<BuiltinRegistration> {
    vec![
        // Hero
        (
            Arc::new(HeroPrism::new()) as Arc<dyn ComponentRenderer>,
            HeroPrism::metadata(),
            HeroPrism::validator(),
        ),
        (
            Arc::new(HeroTerminal::new()),
            HeroTerminal::metadata(),
            HeroTerminal::validator(),
        ),
        // Experience
        (
            Arc::new(ExperienceTimeline::new()),
            ExperienceTimeline::metadata(),
            ExperienceTimeline::validator(),
        ),
        (
            Arc::new(ExperienceCards::new()),
            ExperienceCards::metadata(),
            ExperienceCards::validator(),
        ),
        // Skills
        (
            Arc::new(SkillsDots::new()),
            SkillsDots::metadata(),
            SkillsDots::validator(),
        ),
        (
            Arc::new(SkillsBars::new()),
            SkillsBars::metadata(),
            SkillsBars::validator(),
        ),
        // Stats
        (
            Arc::new(StatsAchievements::new()),
            StatsAchievements::metadata(),
            StatsAchievements::validator(),
        ),
    ]
}

/// 모든 builtin 렌더러 인스턴스 생성
pub fn all_components() -> Vec<Arc<dyn ComponentRenderer>> {
    registrations().into_iter().map(|(r, _, _)| r).collect()
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_foundation::ComponentCategory;

    #[test]
    fn test_registration_count() {
        assert_eq!(registrations().len(), 7);
    }

    #[test]
    fn test_ids_unique_and_consistent() {
        let regs = registrations();
        let mut ids: Vec<&str> = vec![];
        for (renderer, metadata, _) in &regs {
            // 렌더러와 메타데이터의 식별자/카테고리가 일치해야 함
            assert_eq!(renderer.id(), metadata.id);
            assert_eq!(renderer.category(), metadata.category);
            assert!(!ids.contains(&renderer.id()), "duplicate id {}", renderer.id());
            ids.push(renderer.id());
        }
    }

    #[test]
    fn test_every_category_covered() {
        let regs = registrations();
        for category in ComponentCategory::ALL {
            assert!(
                regs.iter().any(|(r, _, _)| r.category() == category),
                "no builtin for category {}",
                category
            );
        }
    }

    #[test]
    fn test_all_have_required_props() {
        for (_, metadata, _) in registrations() {
            assert!(
                !metadata.required_props.is_empty(),
                "{} has no required props",
                metadata.id
            );
            assert!(!metadata.display_name.is_empty());
        }
    }
}
