//! 홈 페이지 View DTO

use serde::Serialize;
use crate::domain::dto::artworks::ArtworkSimpleDTO;
use crate::domain::dto::exhibitions::ExhibitionSimpleDTO;
use crate::domain::dto::notices::NoticeSimpleDTO;
use super::ViewDto;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewDTO {
    pub title: String,
    pub featured_artworks: Vec<ArtworkSimpleDTO>,
    /// 진행 중인 전시
    pub current_exhibitions: Vec<ExhibitionSimpleDTO>,
    pub recent_notices: Vec<NoticeSimpleDTO>,
}

impl Default for HomeViewDTO {
    fn default() -> Self {
        Self {
            title: "홈".to_string(),
            featured_artworks: Vec::new(),
            current_exhibitions: Vec::new(),
            recent_notices: Vec::new(),
        }
    }
}

impl ViewDto for HomeViewDTO {
    const TEMPLATE: &'static str = "home/index";
}
