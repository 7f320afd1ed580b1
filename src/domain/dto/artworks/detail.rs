//! 작품 상세 DTO

use serde::Serialize;
use crate::domain::dto::common::{optimize_optional, ImageUrlOptimizer, SimpleVariant};
use crate::domain::dto::exhibitions::ExhibitionSimpleDTO;
use crate::domain::dto::Dto;
use crate::domain::entities::artworks::artwork::Artwork;
use super::response::ArtworkSimpleDTO;

/// 작품 상세 DTO
///
/// 출품 전시와 관련 작품을 함께 담습니다.
/// 모든 이미지 URL은 생성 시점에 [`ImageUrlOptimizer`]를 한 번씩 거칩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetailDTO {
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
    pub exhibitions: Vec<ExhibitionSimpleDTO>,
    pub related_artworks: Vec<ArtworkSimpleDTO>,
}

impl Dto for ArtworkDetailDTO {}

impl ArtworkDetailDTO {
    pub fn new(artwork: &Artwork, optimizer: &dyn ImageUrlOptimizer) -> Self {
        let exhibitions = artwork
            .exhibitions
            .iter()
            .map(|exhibition| {
                let mut dto = ExhibitionSimpleDTO::new(exhibition, SimpleVariant::Card);
                dto.image = optimize_optional(optimizer, exhibition.image.as_deref());
                dto
            })
            .collect();

        let related_artworks = artwork
            .related_artworks
            .iter()
            .map(|related| {
                let mut dto = ArtworkSimpleDTO::new(related, SimpleVariant::Card);
                dto.image_url = optimize_optional(optimizer, related.image_url.as_deref());
                dto
            })
            .collect();

        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            slug: artwork.slug.clone(),
            medium: artwork.medium.clone(),
            size: artwork.size.clone(),
            year: artwork.year,
            description: artwork.description.clone(),
            image_url: optimize_optional(optimizer, artwork.image_url.as_deref()),
            is_featured: artwork.is_featured,
            user_id: artwork.user_id.clone(),
            artist_name: artwork.artist_name.clone(),
            artist_affiliation: artwork.artist_affiliation.clone(),
            exhibitions,
            related_artworks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::common::test_support::PrefixOptimizer;
    use crate::domain::entities::exhibitions::exhibition::Exhibition;

    fn artwork() -> Artwork {
        let mut exhibition = Exhibition::new("2024-GRAD".to_string(), "졸업전".to_string());
        exhibition.image = Some("poster.jpg".to_string());

        let mut related = Artwork::new("습작".to_string(), "Kim".to_string());
        related.image_url = Some("sketch.jpg".to_string());

        let mut artwork = Artwork::new("무제".to_string(), "Kim".to_string());
        artwork.image_url = Some("main.jpg".to_string());
        artwork.exhibitions = vec![exhibition];
        artwork.related_artworks = vec![related];
        artwork
    }

    #[test]
    fn test_every_image_is_optimized() {
        let dto = ArtworkDetailDTO::new(&artwork(), &PrefixOptimizer);

        assert_eq!(dto.image_url.as_deref(), Some("opt:main.jpg"));
        assert_eq!(dto.exhibitions[0].image.as_deref(), Some("opt:poster.jpg"));
        assert_eq!(dto.related_artworks[0].image_url.as_deref(), Some("opt:sketch.jpg"));
    }

    #[test]
    fn test_missing_image_stays_null() {
        let mut source = artwork();
        source.image_url = None;
        source.related_artworks[0].image_url = Some(String::new());

        let json = ArtworkDetailDTO::new(&source, &PrefixOptimizer).to_json();

        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["relatedArtworks"][0]["imageUrl"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_relations_serialize_as_arrays() {
        let json = ArtworkDetailDTO::new(&Artwork::new("무제".to_string(), "Kim".to_string()), &PrefixOptimizer).to_json();

        assert_eq!(json["exhibitions"], serde_json::json!([]));
        assert_eq!(json["relatedArtworks"], serde_json::json!([]));
    }

    #[test]
    fn test_nested_items_are_cards() {
        let json = ArtworkDetailDTO::new(&artwork(), &PrefixOptimizer).to_json();

        assert_eq!(json["exhibitions"][0]["type"], "exhibition");
        assert_eq!(json["relatedArtworks"][0]["type"], "artwork");
    }
}
