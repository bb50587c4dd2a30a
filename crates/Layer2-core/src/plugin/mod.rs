//! Plugin System - 런타임 컴포넌트 확장
//!
//! - `traits`: `PortfolioPlugin` 레코드와 `PluginHooks` 생명주기 계약
//! - `system`: 등록/해제/활성화를 관장하는 `PluginSystem`
//!
//! 플러그인은 core를 절대 대체할 수 없습니다. core와 같은 id로 등록해도
//! 조회는 항상 core로 해석됩니다.

pub mod system;
pub mod traits;

pub use system::{PluginConfig, PluginSystem, RegistrationOutcome};
pub use traits::{PluginHooks, PortfolioPlugin};
