//! # 관리자 대시보드 컨트롤러

use std::sync::Arc;
use actix_web::HttpResponse;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::views::{AdminDashboardViewDTO, DashboardCounts},
    services::artworks::ArtworkService,
    services::exhibitions::ExhibitionService,
    services::notices::NoticeService,
    services::rendering::ViewRenderer,
    services::users::UserService,
};

const RECENT_ITEMS: usize = 5;

pub struct AdminController {
    artwork_service: Arc<ArtworkService>,
    exhibition_service: Arc<ExhibitionService>,
    notice_service: Arc<NoticeService>,
    user_service: Arc<UserService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "admin", AdminController, AdminController::from_locator);

impl AdminController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            artwork_service: locator.get::<ArtworkService>()?,
            exhibition_service: locator.get::<ExhibitionService>()?,
            notice_service: locator.get::<NoticeService>()?,
            user_service: locator.get::<UserService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    async fn counts(&self) -> AppResult<DashboardCounts> {
        Ok(DashboardCounts {
            artworks: self.artwork_service.count().await?,
            exhibitions: self.exhibition_service.count().await?,
            notices: self.notice_service.count().await?,
            users: self.user_service.count().await?,
        })
    }

    /// `GET /admin`
    pub async fn dashboard_page(&self) -> AppResult<HttpResponse> {
        let view = AdminDashboardViewDTO {
            counts: self.counts().await?,
            recent_artworks: self.artwork_service.recent(RECENT_ITEMS).await?,
            recent_notices: self.notice_service.recent(RECENT_ITEMS).await?,
            ..Default::default()
        };

        render_page(self.renderer.as_ref(), &view).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{body_string, locator, page_data};
    use crate::domain::dto::notices::NoticeRequestDTO;
    use crate::domain::dto::RequestDto;
    use serde_json::json;

    #[actix_web::test]
    async fn test_dashboard_counts_every_notice() {
        let controller = locator().resolve_as::<AdminController>("admin").unwrap();

        for status in ["active", "inactive"] {
            let request = NoticeRequestDTO::from_value(json!({
                "title": "안내", "content": "본문", "author": "U1", "authorName": "관리자", "status": status
            }))
            .unwrap();
            controller.notice_service.create(request).await.unwrap();
        }

        let data = page_data(&body_string(controller.dashboard_page().await.unwrap()).await);

        assert_eq!(data["counts"]["notices"], 2);
        assert_eq!(data["counts"]["artworks"], 0);
        assert_eq!(data["recentNotices"].as_array().map(Vec::len), Some(1));
    }
}
