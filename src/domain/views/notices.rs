//! 공지 페이지 View DTO

use serde::Serialize;
use crate::domain::dto::common::PaginationInfo;
use crate::domain::dto::notices::{NoticeListDTO, NoticeResponseDTO, NoticeSimpleDTO};
use super::ViewDto;

/// 공지 목록 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeListViewDTO {
    pub title: String,
    pub notices: Vec<NoticeSimpleDTO>,
    pub pagination: PaginationInfo,
}

impl Default for NoticeListViewDTO {
    fn default() -> Self {
        Self {
            title: "공지사항".to_string(),
            notices: Vec::new(),
            pagination: PaginationInfo::default(),
        }
    }
}

impl NoticeListViewDTO {
    pub fn new(list: NoticeListDTO) -> Self {
        Self {
            pagination: list.pagination(),
            notices: list.items,
            ..Default::default()
        }
    }
}

impl ViewDto for NoticeListViewDTO {
    const TEMPLATE: &'static str = "notice/list";
}

/// 공지 상세 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDetailViewDTO {
    pub title: String,
    pub notice: NoticeResponseDTO,
}

impl Default for NoticeDetailViewDTO {
    fn default() -> Self {
        Self {
            title: "공지사항".to_string(),
            notice: NoticeResponseDTO::default(),
        }
    }
}

impl NoticeDetailViewDTO {
    pub fn new(notice: NoticeResponseDTO) -> Self {
        Self {
            title: notice.title.clone(),
            notice,
        }
    }
}

impl ViewDto for NoticeDetailViewDTO {
    const TEMPLATE: &'static str = "notice/detail";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_list_view() {
        let view = NoticeListViewDTO::default().to_view();

        assert_eq!(view["notices"], json!([]));
        assert_eq!(view["pagination"], json!({"currentPage": 1, "totalPages": 1, "total": 0}));
    }

    #[test]
    fn test_default_detail_view_renders_empty_notice() {
        let view = NoticeDetailViewDTO::default().to_view();

        assert_eq!(view["notice"]["title"], "");
        assert_eq!(view["notice"]["views"], 0);
        assert_eq!(view["notice"]["status"], "active");
    }

    #[test]
    fn test_detail_view_title_follows_notice() {
        let notice = NoticeResponseDTO { title: "휴관 안내".to_string(), ..Default::default() };

        assert_eq!(NoticeDetailViewDTO::new(notice).title, "휴관 안내");
    }
}
