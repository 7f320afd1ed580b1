//! 작품 페이지 View DTO

use serde::Serialize;
use crate::domain::dto::artworks::{ArtworkDetailDTO, ArtworkListDTO, ArtworkSimpleDTO};
use crate::domain::dto::common::PaginationInfo;
use super::ViewDto;

/// 작품 목록 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkListViewDTO {
    pub title: String,
    pub artworks: Vec<ArtworkSimpleDTO>,
    pub pagination: PaginationInfo,
}

impl Default for ArtworkListViewDTO {
    fn default() -> Self {
        Self {
            title: "작품".to_string(),
            artworks: Vec::new(),
            pagination: PaginationInfo::default(),
        }
    }
}

impl ArtworkListViewDTO {
    pub fn new(list: ArtworkListDTO) -> Self {
        Self {
            pagination: list.pagination(),
            artworks: list.items,
            ..Default::default()
        }
    }
}

impl ViewDto for ArtworkListViewDTO {
    const TEMPLATE: &'static str = "artwork/list";
}

/// 공유 버튼에 필요한 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInfo {
    pub client_key: String,
    /// 작품 상세 페이지의 절대 URL
    pub url: String,
    pub title: String,
    pub image_url: Option<String>,
}

/// 작품 상세 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetailViewDTO {
    pub title: String,
    pub artwork: ArtworkDetailDTO,
    pub share: ShareInfo,
}

impl Default for ArtworkDetailViewDTO {
    fn default() -> Self {
        Self {
            title: "작품 상세".to_string(),
            artwork: ArtworkDetailDTO::default(),
            share: ShareInfo::default(),
        }
    }
}

impl ArtworkDetailViewDTO {
    pub fn new(artwork: ArtworkDetailDTO, share: ShareInfo) -> Self {
        Self {
            title: artwork.title.clone(),
            artwork,
            share,
        }
    }
}

impl ViewDto for ArtworkDetailViewDTO {
    const TEMPLATE: &'static str = "artwork/detail";
}
