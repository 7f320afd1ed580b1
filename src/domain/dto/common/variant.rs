//! Simple DTO 변형 선택자
//!
//! 카드 그리드, 모달, 기본 목록처럼 같은 엔티티를 다른 모양으로 내보낼 때
//! 어떤 추가 필드를 붙일지 결정합니다.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// Simple DTO 출력 변형
///
/// | 변형 | 추가 필드 |
/// |------|-----------|
/// | `Default` | 없음 (기본 필드만) |
/// | `Card` | `type` + 카드 표시용 필드 |
/// | `Modal` | `type` + 카드 필드 + 상세 설명 필드 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpleVariant {
    #[default]
    Default,
    Card,
    Modal,
}

impl SimpleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleVariant::Default => "default",
            SimpleVariant::Card => "card",
            SimpleVariant::Modal => "modal",
        }
    }

    /// 쿼리 파라미터 값을 해석합니다. 값이 없거나 비어 있으면 `Default`입니다.
    ///
    /// 알 수 없는 값은 `view` 필드 검증 에러입니다.
    pub fn parse_optional(value: Option<&str>) -> AppResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(SimpleVariant::Default),
            Some(tag) => tag.parse(),
        }
    }
}

impl fmt::Display for SimpleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimpleVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(SimpleVariant::Default),
            "card" => Ok(SimpleVariant::Card),
            "modal" => Ok(SimpleVariant::Modal),
            other => Err(AppError::field(
                "view",
                format!("지원하지 않는 표시 형식입니다: {} (card, modal, default 중 하나)", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_variants() {
        assert_eq!("card".parse::<SimpleVariant>().unwrap(), SimpleVariant::Card);
        assert_eq!("modal".parse::<SimpleVariant>().unwrap(), SimpleVariant::Modal);
        assert_eq!("default".parse::<SimpleVariant>().unwrap(), SimpleVariant::Default);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = "grid".parse::<SimpleVariant>().unwrap_err();

        assert!(err.is_field_error("view"));
        assert!(err.to_string().contains("grid"));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(SimpleVariant::parse_optional(None).unwrap(), SimpleVariant::Default);
        assert_eq!(SimpleVariant::parse_optional(Some("  ")).unwrap(), SimpleVariant::Default);
        assert_eq!(SimpleVariant::parse_optional(Some("card")).unwrap(), SimpleVariant::Card);
        assert!(SimpleVariant::parse_optional(Some("CARD")).is_err());
    }
}
