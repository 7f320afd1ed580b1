//! 공지 관련 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::dto::RequestDto;
use crate::domain::entities::notices::notice::NoticeStatus;
use crate::utils::string_utils::deserialize_trimmed_string;

fn default_status() -> String {
    NoticeStatus::default().as_str().to_string()
}

/// 공지 등록/수정 요청 DTO
///
/// 제목, 내용, 작성자, 작성자 이름은 공백을 제거한 뒤 비어 있으면 안 됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRequestDTO {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    pub content: String,

    /// 작성자 사용자 ID
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "작성자는 필수입니다"))]
    pub author: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "작성자 이름은 필수입니다"))]
    pub author_name: String,

    #[serde(default)]
    pub is_important: bool,

    /// `active` / `inactive` (기본값 `active`)
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

impl RequestDto for NoticeRequestDTO {}

impl NoticeRequestDTO {
    pub fn status(&self) -> NoticeStatus {
        self.status.parse().unwrap_or_default()
    }
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    status.parse::<NoticeStatus>().map(|_| ()).map_err(|_| {
        ValidationError::new("invalid_status").with_message("상태는 active 또는 inactive 여야 합니다".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> serde_json::Value {
        json!({ "title": "전시 일정 안내", "content": "x", "author": "a", "authorName": "A" })
    }

    #[test]
    fn test_valid_request_defaults() {
        let request = NoticeRequestDTO::from_value(body()).unwrap();

        assert!(request.check().is_ok());
        assert!(!request.is_important);
        assert_eq!(request.status(), NoticeStatus::Active);
    }

    #[test]
    fn test_empty_title_names_title() {
        let mut value = body();
        value["title"] = json!("");

        let err = NoticeRequestDTO::from_value(value).unwrap().check().unwrap_err();

        assert!(err.is_field_error("title"));
        assert!(!err.is_field_error("content"));
    }

    #[test]
    fn test_blank_fields_are_named() {
        for field in ["title", "content", "author", "authorName"] {
            let mut value = body();
            value[field] = json!("   ");

            let err = NoticeRequestDTO::from_value(value).unwrap().check().unwrap_err();
            assert!(err.is_field_error(field), "{} 공백이 보고되지 않음: {}", field, err);
        }
    }

    #[test]
    fn test_unknown_status_names_status() {
        let mut value = body();
        value["status"] = json!("archived");

        let err = NoticeRequestDTO::from_value(value).unwrap().check().unwrap_err();
        assert!(err.is_field_error("status"));
    }

    #[test]
    fn test_wrong_type_names_field() {
        for (field, bad) in [("title", json!(5)), ("status", json!(1)), ("isImportant", json!("yes"))] {
            let mut value = body();
            value[field] = bad;

            let err = NoticeRequestDTO::from_value(value).unwrap_err();
            assert!(err.is_field_error(field), "{} 타입 오류가 보고되지 않음: {}", field, err);
        }
    }

    #[test]
    fn test_inactive_status() {
        let mut value = body();
        value["status"] = json!("inactive");
        value["isImportant"] = json!(true);

        let request = NoticeRequestDTO::from_value(value).unwrap();
        assert!(request.check().is_ok());
        assert_eq!(request.status(), NoticeStatus::Inactive);
        assert!(request.is_important);
    }
}
