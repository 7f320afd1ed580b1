//! # 홈 페이지 컨트롤러

use std::sync::Arc;
use actix_web::HttpResponse;
use chrono::Local;
use crate::{
    controllers::{locate_renderer, render_page},
    core::errors::AppResult,
    core::registry::{register_component, ServiceLocator},
    domain::dto::common::SimpleVariant,
    domain::views::HomeViewDTO,
    services::artworks::ArtworkService,
    services::exhibitions::ExhibitionService,
    services::notices::NoticeService,
    services::rendering::ViewRenderer,
};

const FEATURED_ARTWORKS: usize = 8;
const RECENT_NOTICES: usize = 5;

pub struct HomeController {
    artwork_service: Arc<ArtworkService>,
    exhibition_service: Arc<ExhibitionService>,
    notice_service: Arc<NoticeService>,
    renderer: Arc<dyn ViewRenderer>,
}

register_component!(Controller, "home", HomeController, HomeController::from_locator);

impl HomeController {
    pub fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            artwork_service: locator.get::<ArtworkService>()?,
            exhibition_service: locator.get::<ExhibitionService>()?,
            notice_service: locator.get::<NoticeService>()?,
            renderer: locate_renderer(locator)?,
        })
    }

    /// `GET /`
    ///
    /// 추천 작품, 오늘 진행 중인 전시, 최근 공지로 홈 화면을 구성합니다.
    pub async fn index(&self) -> AppResult<HttpResponse> {
        let today = Local::now().date_naive();

        let view = HomeViewDTO {
            featured_artworks: self.artwork_service.featured(FEATURED_ARTWORKS, SimpleVariant::Card).await?,
            current_exhibitions: self.exhibition_service.ongoing(today).await?,
            recent_notices: self.notice_service.recent(RECENT_NOTICES).await?,
            ..Default::default()
        };

        render_page(self.renderer.as_ref(), &view).await
    }
}
