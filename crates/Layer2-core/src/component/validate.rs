//! Prop Validation Helpers - 검증기 공통 템플릿
//!
//! 모든 builtin 검증기(그리고 플러그인 검증기 권장 패턴)가 따르는 규칙:
//! - 필수 prop 누락/타입 불일치 → 하드 에러
//! - 비어 있지만 존재하는 목록, 사용성 임계 미달 → 소프트 경고
//!
//! 검증기는 입력을 변경하지 않으며 동일 입력에 결정적입니다.

use folio_foundation::ValidationResult;
use serde_json::Value;

/// 필수 문자열 prop 검사
///
/// 누락이거나 문자열이 아니면 에러, 빈 문자열이면 경고.
pub fn require_string(result: &mut ValidationResult, props: &Value, field: &str) {
    match props.get(field) {
        None => result.add_error(format!("missing required prop '{}'", field)),
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                result.add_warning(format!("prop '{}' is empty", field));
            }
        }
        Some(_) => result.add_error(format!("prop '{}' must be a string", field)),
    }
}

/// 필수 목록 prop 검사
///
/// 누락이거나 배열이 아니면 에러. 비어 있음 처리는 호출자 몫이므로
/// 존재하는 배열을 반환합니다.
pub fn require_list<'a>(
    result: &mut ValidationResult,
    props: &'a Value,
    field: &str,
) -> Option<&'a Vec<Value>> {
    match props.get(field) {
        None => {
            result.add_error(format!("missing required prop '{}'", field));
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            result.add_error(format!("prop '{}' must be a list", field));
            None
        }
    }
}

/// `order` 값 검사 - 음수는 하드 에러
pub fn check_order(result: &mut ValidationResult, order: i64) {
    if order < 0 {
        result.add_error(format!("order must be a non-negative integer, got {}", order));
    }
}

/// 목록 항목이 주어진 문자열 필드를 가진 객체인지 검사
pub fn require_entry_strings(
    result: &mut ValidationResult,
    items: &[Value],
    list_field: &str,
    entry_field: &str,
) {
    for (i, item) in items.iter().enumerate() {
        match item.get(entry_field) {
            Some(Value::String(_)) => {}
            _ => result.add_error(format!(
                "{}[{}] missing string field '{}'",
                list_field, i, entry_field
            )),
        }
    }
}
