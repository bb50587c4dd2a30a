//! Component System - builtin 렌더러와 검증 헬퍼
//!
//! - `builtin`: 고정 core 컴포넌트 7종 (파일당 하나)
//! - `validate`: 모든 검증기가 공유하는 템플릿 헬퍼

pub mod builtin;
pub mod validate;

pub use builtin::{all_components, registrations, BuiltinRegistration};

/// 사용자 입력을 HTML에 안전하게 삽입하기 위한 이스케이프
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
