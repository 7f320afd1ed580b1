//! 관리자 대시보드 View DTO

use serde::Serialize;
use crate::domain::dto::artworks::ArtworkSimpleDTO;
use crate::domain::dto::notices::NoticeSimpleDTO;
use super::ViewDto;

/// 엔티티별 건수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub artworks: u64,
    pub exhibitions: u64,
    pub notices: u64,
    pub users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardViewDTO {
    pub title: String,
    pub counts: DashboardCounts,
    pub recent_artworks: Vec<ArtworkSimpleDTO>,
    pub recent_notices: Vec<NoticeSimpleDTO>,
}

impl Default for AdminDashboardViewDTO {
    fn default() -> Self {
        Self {
            title: "관리자".to_string(),
            counts: DashboardCounts::default(),
            recent_artworks: Vec::new(),
            recent_notices: Vec::new(),
        }
    }
}

impl ViewDto for AdminDashboardViewDTO {
    const TEMPLATE: &'static str = "admin/dashboard";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dashboard() {
        let view = AdminDashboardViewDTO::default().to_view();

        assert_eq!(
            view["counts"],
            serde_json::json!({"artworks": 0, "exhibitions": 0, "notices": 0, "users": 0})
        );
        assert_eq!(view["recentArtworks"], serde_json::json!([]));
    }
}
