//! Artworks Entity Module
//!
//! 작품 엔티티를 정의합니다. 작품과 전시의 다대다 관계는
//! [`ArtworkExhibitionLink`] 레코드로 저장소에 보관됩니다.

pub mod artwork;

use serde::{Deserialize, Serialize};

/// 작품-전시 연결 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkExhibitionLink {
    pub artwork_id: String,
    pub exhibition_id: String,
}
