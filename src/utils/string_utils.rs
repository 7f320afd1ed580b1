//! # 문자열 유틸리티
//!
//! Request DTO 검증과 슬러그 생성에 쓰이는 공통 문자열 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거한 값을 반환합니다.
///
/// 실패 시 에러 메시지는 `field_name`으로 시작합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::field(field_name, "필수 항목입니다"));
    }
    Ok(trimmed.to_string())
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열과 공백 문자열을 `None`으로 정리하는 serde 역직렬화 함수
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 앞뒤 공백을 제거하는 serde 역직렬화 함수. `null`은 빈 문자열이 됩니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(|s| s.trim().to_string()).unwrap_or_default())
}

/// 제목으로 URL 슬러그를 만듭니다.
///
/// 영문은 소문자로 바꾸고, 한글과 숫자는 유지하며, 나머지는 `-` 하나로 합칩니다.
///
/// ```rust,ignore
/// assert_eq!(slugify("Blue Hour, 2024"), "blue-hour-2024");
/// assert_eq!(slugify("  봄의 정원  "), "봄의-정원");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// `base`가 사용 중이면 `-2`, `-3` … 접미사를 붙여 처음으로 비어 있는 값을 돌려줍니다.
///
/// 같은 쓰기 락 안에서 `is_taken`을 평가해야 중복 배정이 생기지 않습니다.
pub fn first_available(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = base.to_string();
    let mut suffix = 2;
    while is_taken(&candidate) {
        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    candidate
}
