//! Theme System - 고정 팔레트와 현재 테마 상태
//!
//! - `palettes`: 세 가지 고정 팔레트와 순수 조회 함수
//! - `engine`: 현재 테마 추적 + 지연 리스너 알림
//!
//! 무효한 테마 식별자는 어디서도 에러를 내지 않고 기본 테마로
//! 내려앉습니다. 가용성이 엄격함보다 우선합니다.

pub mod engine;
pub mod palettes;

pub use engine::{ThemeEngine, ThemeListener};
pub use palettes::{definition, definition_for, AURORA, NEON_GRID, PAPER};
