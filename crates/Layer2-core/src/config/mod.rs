//! Configuration System - 전역/컴포넌트 설정
//!
//! - `settings`: 설정 타입과 깊은 병합 규칙
//! - `manager`: 변경 이벤트를 게시하는 `ConfigManager`
//!
//! 설정은 레지스트리/플러그인 계층이 조회하는 입력일 뿐, 여기서
//! 렌더링을 직접 제어하지 않습니다.

pub mod manager;
pub mod settings;

pub use manager::ConfigManager;
pub use settings::{
    ComponentSettings, ComponentSettingsPatch, ComponentTelemetry, GlobalSettings,
};
