//! 작품 관련 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::dto::common::{PagedListDTO, SimpleProjection, SimpleVariant};
use crate::domain::dto::Dto;
use crate::domain::entities::artworks::artwork::Artwork;

/// 작품 응답 DTO
///
/// 관계(전시, 관련 작품)는 포함하지 않습니다. 필요하면 [`super::ArtworkDetailDTO`]를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkResponseDTO {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub medium: String,
    pub size: String,
    pub year: Option<i32>,
    pub description: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub user_id: Option<String>,
    pub artist_name: String,
    pub artist_affiliation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dto for ArtworkResponseDTO {}

impl From<&Artwork> for ArtworkResponseDTO {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            slug: artwork.slug.clone(),
            medium: artwork.medium.clone(),
            size: artwork.size.clone(),
            year: artwork.year,
            description: artwork.description.clone(),
            image_url: artwork.image_url.clone(),
            is_featured: artwork.is_featured,
            user_id: artwork.user_id.clone(),
            artist_name: artwork.artist_name.clone(),
            artist_affiliation: artwork.artist_affiliation.clone(),
            created_at: artwork.created_at,
            updated_at: artwork.updated_at,
        }
    }
}

/// 변형별 추가 필드
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArtworkVariantFields {
    Card {
        #[serde(rename = "type")]
        kind: &'static str,
        medium: String,
        year: Option<i32>,
    },
    #[serde(rename_all = "camelCase")]
    Modal {
        #[serde(rename = "type")]
        kind: &'static str,
        medium: String,
        year: Option<i32>,
        size: String,
        description: String,
        artist_affiliation: String,
    },
}

/// 작품 Simple DTO
///
/// 목록, 카드, 모달에서 사용하는 축약 표현입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSimpleDTO {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub artist_name: String,
    #[serde(flatten)]
    pub variant_fields: Option<ArtworkVariantFields>,
}

impl Dto for ArtworkSimpleDTO {}

impl ArtworkSimpleDTO {
    const KIND: &'static str = "artwork";

    pub fn new(artwork: &Artwork, variant: SimpleVariant) -> Self {
        let variant_fields = match variant {
            SimpleVariant::Default => None,
            SimpleVariant::Card => Some(ArtworkVariantFields::Card {
                kind: Self::KIND,
                medium: artwork.medium.clone(),
                year: artwork.year,
            }),
            SimpleVariant::Modal => Some(ArtworkVariantFields::Modal {
                kind: Self::KIND,
                medium: artwork.medium.clone(),
                year: artwork.year,
                size: artwork.size.clone(),
                description: artwork.description.clone(),
                artist_affiliation: artwork.artist_affiliation.clone(),
            }),
        };

        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            slug: artwork.slug.clone(),
            image_url: artwork.image_url.clone(),
            artist_name: artwork.artist_name.clone(),
            variant_fields,
        }
    }
}

impl SimpleProjection<Artwork> for ArtworkSimpleDTO {
    fn project(entity: &Artwork, variant: SimpleVariant) -> Self {
        Self::new(entity, variant)
    }
}

/// 작품 목록 DTO
pub type ArtworkListDTO = PagedListDTO<ArtworkSimpleDTO>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artwork() -> Artwork {
        Artwork {
            id: "A1".to_string(),
            title: "무제".to_string(),
            slug: "무제".to_string(),
            medium: "Oil on canvas".to_string(),
            size: "100x80".to_string(),
            year: Some(2024),
            description: "설명".to_string(),
            artist_name: "Kim".to_string(),
            artist_affiliation: "서양화과".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_optionals_use_defaults() {
        let json = ArtworkResponseDTO::from(&Artwork::default()).to_json();

        assert_eq!(json["medium"], "");
        assert_eq!(json["year"], serde_json::Value::Null);
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["userId"], serde_json::Value::Null);
        assert_eq!(json["isFeatured"], false);
    }

    #[test]
    fn test_card_variant() {
        let json = ArtworkSimpleDTO::new(&artwork(), SimpleVariant::Card).to_json();

        assert_eq!(
            json,
            json!({
                "id": "A1",
                "title": "무제",
                "slug": "무제",
                "imageUrl": null,
                "artistName": "Kim",
                "type": "artwork",
                "medium": "Oil on canvas",
                "year": 2024
            })
        );
    }

    #[test]
    fn test_modal_variant() {
        let json = ArtworkSimpleDTO::new(&artwork(), SimpleVariant::Modal).to_json();

        assert_eq!(json["size"], "100x80");
        assert_eq!(json["description"], "설명");
        assert_eq!(json["artistAffiliation"], "서양화과");
    }

    #[test]
    fn test_default_variant_has_no_extras() {
        let json = ArtworkSimpleDTO::new(&artwork(), SimpleVariant::Default).to_json();

        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_zero_like_values_are_kept() {
        let mut source = artwork();
        source.year = Some(0);
        source.is_featured = false;

        let json = ArtworkResponseDTO::from(&source).to_json();
        assert_eq!(json["year"], 0);
        assert_eq!(json["isFeatured"], false);
    }
}
