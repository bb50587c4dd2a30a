//! Layout System - 레이아웃 요청 합성
//!
//! 업스트림이 만든 `{identifier, props, order}` 목록과 테마 식별자를
//! 받아 완성된 페이지로 합성합니다. 잘못된 입력은 절대 패닉으로 이어지지
//! 않고 보고서에 남습니다.

pub mod pipeline;

pub use pipeline::{placeholder_section, ComposedPage, PortfolioComposer};
