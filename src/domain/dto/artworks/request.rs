//! 작품 관련 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::RequestDto;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 작품 등록/수정 요청 DTO
///
/// 필수: `title`, `artistId`, `artistName`, `department`
///
/// ```json
/// {
///   "title": "무제",
///   "artistId": "U1",
///   "artistName": "Kim",
///   "department": "서양화과",
///   "exhibitionIds": ["E1"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRequestDTO {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 200, message = "작품 제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "작가 ID는 필수입니다"))]
    pub artist_id: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "작가 이름은 필수입니다"))]
    pub artist_name: String,

    /// 작가 소속 학과
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "학과는 필수입니다"))]
    pub department: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub medium: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub size: String,

    #[serde(default)]
    #[validate(range(min = 1900, max = 2100, message = "제작 연도가 올바르지 않습니다"))]
    pub year: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    /// 출품 전시 ID 목록
    #[serde(default)]
    pub exhibition_ids: Vec<String>,
}

impl RequestDto for ArtworkRequestDTO {}
