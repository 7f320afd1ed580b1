//! 사용자 관련 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::dto::RequestDto;
use crate::domain::entities::users::user::UserRole;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

fn default_role() -> String {
    UserRole::default().as_str().to_string()
}

/// 관리자 사용자 등록 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestDTO {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 소속 학과
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "학과는 필수입니다"))]
    pub department: String,

    /// `admin` / `member` / `external` (기본값 `member`)
    #[serde(default = "default_role")]
    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile_image: Option<String>,
}

impl RequestDto for UserRequestDTO {}

impl UserRequestDTO {
    /// 검증을 통과한 요청의 역할 값
    pub fn role(&self) -> UserRole {
        self.role.parse().unwrap_or_default()
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<UserRole>().map(|_| ()).map_err(|_| {
        ValidationError::new("invalid_role").with_message("역할은 admin, member, external 중 하나여야 합니다".into())
    })
}

/// 계정 활성화 상태 변경 요청 DTO
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserActiveRequestDTO {
    #[serde(default)]
    #[validate(required(message = "활성화 여부는 필수입니다"))]
    pub is_active: Option<bool>,
}

impl RequestDto for UserActiveRequestDTO {}
