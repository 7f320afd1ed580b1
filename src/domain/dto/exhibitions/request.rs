//! 전시 관련 요청 DTO

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::dto::RequestDto;
use crate::domain::entities::exhibitions::exhibition::ExhibitionType;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

fn default_exhibition_type() -> String {
    ExhibitionType::default().as_str().to_string()
}

/// 전시 등록/수정 요청 DTO
///
/// `code`가 비어 있으면 서비스에서 자동 발급합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct ExhibitionRequestDTO {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200, message = "전시 제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub subtitle: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub description: String,

    #[serde(default)]
    #[validate(required(message = "시작일은 필수입니다"))]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(required(message = "종료일은 필수입니다"))]
    pub end_date: Option<NaiveDate>,

    /// 포스터 이미지 URL
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,

    /// `regular` / `other` (기본값 `regular`)
    #[serde(default = "default_exhibition_type")]
    #[validate(custom(function = "validate_exhibition_type"))]
    pub exhibition_type: String,
}

impl RequestDto for ExhibitionRequestDTO {}

impl ExhibitionRequestDTO {
    pub fn exhibition_type(&self) -> ExhibitionType {
        self.exhibition_type.parse().unwrap_or_default()
    }
}

fn validate_exhibition_type(value: &str) -> Result<(), ValidationError> {
    value.parse::<ExhibitionType>().map(|_| ()).map_err(|_| {
        ValidationError::new("invalid_exhibition_type")
            .with_message("전시 유형은 regular 또는 other 여야 합니다".into())
    })
}

fn validate_date_range(request: &ExhibitionRequestDTO) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if end < start {
            return Err(ValidationError::new("end_before_start")
                .with_message("endDate: 종료일은 시작일보다 빠를 수 없습니다".into()));
        }
    }
    Ok(())
}
