//! Theme Palettes - 고정 팔레트 세 가지
//!
//! 테마는 컴파일 타임에 완전히 정의되며 사용자 입력으로는
//! 셋 중 하나를 고르는 것만 가능합니다. 알 수 없는 식별자는
//! 기본 팔레트로 조용히 해석됩니다 (의도된 graceful degradation).

use folio_foundation::{ThemeDefinition, ThemeId};

/// 네온 글로우 다크 팔레트 (기본값)
pub const NEON_GRID: ThemeDefinition = ThemeDefinition {
    id: ThemeId::NeonGrid,
    primary: "#00f0ff",
    secondary: "#0a0e27",
    accent: "#ff2e97",
    glow: "#00f0ff66",
    css_class: "theme-neon-grid",
};

/// 오로라 그라데이션 팔레트
pub const AURORA: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Aurora,
    primary: "#7c3aed",
    secondary: "#10172a",
    accent: "#34d399",
    glow: "#7c3aed55",
    css_class: "theme-aurora",
};

/// 밝은 지면 팔레트
pub const PAPER: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Paper,
    primary: "#1f2937",
    secondary: "#f9fafb",
    accent: "#d97706",
    glow: "#1f293722",
    css_class: "theme-paper",
};

/// 테마 정의 조회 (순수 함수)
pub fn definition(id: ThemeId) -> &'static ThemeDefinition {
    match id {
        ThemeId::NeonGrid => &NEON_GRID,
        ThemeId::Aurora => &AURORA,
        ThemeId::Paper => &PAPER,
    }
}

/// 임의 문자열에서 테마 정의 조회
///
/// 알 수 없는 식별자는 기본 테마 정의를 반환합니다. 에러가 아닙니다.
pub fn definition_for(raw: &str) -> &'static ThemeDefinition {
    definition(ThemeId::from_str_or_default(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_total() {
        // 어떤 입력이든 완전히 채워진 정의를 반환
        for id in ThemeId::ALL {
            let def = definition(id);
            assert_eq!(def.id, id);
            assert!(!def.primary.is_empty());
            assert!(!def.css_class.is_empty());
        }

        let fallback = definition_for("definitely-not-a-theme");
        assert_eq!(fallback.id, ThemeId::DEFAULT);
    }

    #[test]
    fn test_definition_idempotent() {
        // 동일 식별자에 대해 반복 호출 결과가 동일 (순수)
        let a = definition_for("aurora");
        let b = definition_for("aurora");
        assert_eq!(a, b);
        assert_eq!(a.primary, "#7c3aed");
    }
}
