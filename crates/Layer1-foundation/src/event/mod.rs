//! Event Module - 설정 변경 이벤트 시스템
//!
//! 모든 설정 변경은 타입이 있는 이벤트로 발행됩니다:
//! - `global`: 전역 기본값/한도 변경
//! - `component`: 특정 컴포넌트 설정 변경
//! - `availability`: 활성/비활성 전환
//!
//! 히스토리는 고정 용량 링으로 보관되고, 리스너 실패는 격리됩니다.

pub mod bus;
pub mod types;

pub use bus::{ChangeBus, ChangeBusConfig, ChangeListener, ListenerId};
pub use types::{ConfigChangeEvent, ConfigChangeKind, EventId};
