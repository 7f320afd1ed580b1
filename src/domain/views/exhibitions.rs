//! 전시 페이지 View DTO

use serde::Serialize;
use crate::domain::dto::common::PaginationInfo;
use crate::domain::dto::exhibitions::{ExhibitionListDTO, ExhibitionSimpleDTO};
use super::ViewDto;

/// 전시 목록 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionListViewDTO {
    pub title: String,
    pub exhibitions: Vec<ExhibitionSimpleDTO>,
    pub pagination: PaginationInfo,
}

impl Default for ExhibitionListViewDTO {
    fn default() -> Self {
        Self {
            title: "전시".to_string(),
            exhibitions: Vec::new(),
            pagination: PaginationInfo::default(),
        }
    }
}

impl ExhibitionListViewDTO {
    pub fn new(list: ExhibitionListDTO) -> Self {
        Self {
            pagination: list.pagination(),
            exhibitions: list.items,
            ..Default::default()
        }
    }
}

impl ViewDto for ExhibitionListViewDTO {
    const TEMPLATE: &'static str = "exhibition/list";
}
