//! Artwork Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::exhibitions::exhibition::Exhibition;

/// 작품 엔티티
///
/// 저장소에서 읽어온 작품 레코드입니다. 선택 필드는 비어 있을 수 있으며,
/// `exhibitions`와 `related_artworks`는 상세 조회 시 서비스가 채워 넣습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    /// URL 경로에 사용되는 고유 슬러그
    pub slug: String,
    /// 재료/기법 (예: "Oil on canvas")
    pub medium: String,
    /// 크기 (예: "72.7 x 60.6 cm")
    pub size: String,
    /// 제작 연도
    pub year: Option<i32>,
    pub description: String,
    pub image_url: Option<String>,
    /// 메인 화면 추천 작품 여부
    pub is_featured: bool,
    /// 작가 사용자 ID
    pub user_id: Option<String>,
    pub artist_name: String,
    /// 작가 소속 (학과)
    pub artist_affiliation: String,
    /// 작품이 출품된 전시 목록 (상세 조회 시에만 채워짐)
    pub exhibitions: Vec<Exhibition>,
    /// 관련 작품 목록 (상세 조회 시에만 채워짐)
    pub related_artworks: Vec<Artwork>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artwork {
    /// 새 작품 생성
    ///
    /// ID는 UUID v4로 발급되며 슬러그는 서비스에서 설정합니다.
    pub fn new(title: String, artist_name: String) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            artist_name,
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    /// 목록/저장용으로 중첩 컬렉션을 비운 사본
    pub fn without_relations(&self) -> Self {
        Self {
            exhibitions: Vec::new(),
            related_artworks: Vec::new(),
            ..self.clone()
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_artwork_has_id_and_timestamps() {
        let artwork = Artwork::new("Blue Hour".to_string(), "Kim".to_string());

        assert!(!artwork.id.is_empty());
        assert_eq!(artwork.created_at, artwork.updated_at);
        assert!(!artwork.is_featured);
        assert_eq!(artwork.year, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let artwork: Artwork = serde_json::from_str(r#"{"id":"A1","title":"Untitled"}"#).unwrap();

        assert_eq!(artwork.medium, "");
        assert_eq!(artwork.image_url, None);
        assert!(artwork.exhibitions.is_empty());
    }

    #[test]
    fn test_without_relations() {
        let mut artwork = Artwork::new("Blue Hour".to_string(), "Kim".to_string());
        artwork.related_artworks.push(Artwork::new("Dawn".to_string(), "Kim".to_string()));

        let flat = artwork.without_relations();
        assert!(flat.related_artworks.is_empty());
        assert_eq!(flat.id, artwork.id);
    }
}
