//! Registry System - 식별자에서 렌더러로의 해석
//!
//! - `core`: 고정 core 레지스트리 (프로세스 수명 동안 불변)
//! - `extensible`: core + 플러그인 + 설정을 합치는 단일 진입점
//!
//! ## 해석 순서
//!
//! 1. core 식별자면 무조건 core로 해석 (플러그인이 가릴 수 없음)
//! 2. 플러그인 맵 조회 (활성 여부 계산 포함)
//! 3. 둘 다 아니면 `not_found`

pub mod core;
pub mod extensible;

pub use self::core::CoreRegistry;
pub use extensible::ExtensibleRegistry;

use folio_foundation::{ComponentCategory, ComponentConfig, ValidationResult};
use std::collections::HashMap;

/// 레이아웃 수준 경고 계산 (core/extensible 공용)
///
/// 빈 레이아웃, hero 0개/2개 이상, 중복 order를 경고로 추가합니다.
/// 경고는 유효성에 영향을 주지 않습니다.
pub(crate) fn layout_warnings(
    result: &mut ValidationResult,
    configs: &[ComponentConfig],
    category_of: impl Fn(&str) -> Option<ComponentCategory>,
) {
    if configs.is_empty() {
        result.add_warning("layout is empty");
        return;
    }

    let hero_count = configs
        .iter()
        .filter(|c| category_of(&c.component) == Some(ComponentCategory::Hero))
        .count();
    if hero_count == 0 {
        result.add_warning("layout has no hero component");
    } else if hero_count > 1 {
        result.add_warning(format!(
            "layout has {} hero components, expected one",
            hero_count
        ));
    }

    let mut order_counts: HashMap<i64, usize> = HashMap::new();
    for config in configs {
        *order_counts.entry(config.order).or_default() += 1;
    }
    let mut duplicated: Vec<i64> = order_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(order, _)| order)
        .collect();
    duplicated.sort_unstable();
    for order in duplicated {
        result.add_warning(format!("duplicate order value {}", order));
    }
}
